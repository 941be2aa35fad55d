//! Scripted git runner for testing.
//!
//! `StubGit` implements [`GitRunner`] with pre-configured responses and
//! records every invocation for later assertion. Commands without a
//! scripted response fail.
//!
//! # Example
//!
//! ```
//! use covmeta::vcs::{capture, StubGit};
//!
//! let git = StubGit::new().with_stdout(&["rev-parse", "HEAD"], "abc123\n");
//!
//! assert_eq!(capture(&git, &["rev-parse", "HEAD"]).unwrap(), "abc123");
//! assert!(capture(&git, &["rev-parse", "--abbrev-ref", "HEAD"]).is_err());
//! assert_eq!(git.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

use super::runner::{GitOutput, GitRunner};

/// Git runner returning scripted output.
#[derive(Debug, Default)]
pub struct StubGit {
    responses: HashMap<Vec<String>, GitOutput>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl StubGit {
    /// Create a stub with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful command with the given stdout.
    pub fn with_stdout(self, args: &[&str], stdout: &str) -> Self {
        self.with_output(args, GitOutput::success(stdout))
    }

    /// Script an arbitrary result for a command.
    pub fn with_output(mut self, args: &[&str], output: GitOutput) -> Self {
        self.responses.insert(to_key(args), output);
        self
    }

    /// Every invocation so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Whether a command was invoked.
    pub fn was_called(&self, args: &[&str]) -> bool {
        let key = to_key(args);
        self.calls.borrow().iter().any(|call| *call == key)
    }
}

impl GitRunner for StubGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let key = to_key(args);
        let output = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| GitOutput::failure(Some(1), "unscripted git command"));
        self.calls.borrow_mut().push(key);
        Ok(output)
    }
}

fn to_key(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}
