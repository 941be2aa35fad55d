//! Git command execution.
//!
//! All git access goes through the [`GitRunner`] trait so callers can
//! substitute deterministic output in tests. [`SystemGit`] is the real
//! implementation that spawns the `git` executable.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{CovmetaError, Result};

/// Captured result of a git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code (None if killed by signal or unknown).
    pub exit_code: Option<i32>,

    /// Standard output, if any was captured as text.
    pub stdout: Option<String>,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl GitOutput {
    /// Create a success result with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: Some(stdout.into()),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: None,
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Runs git with an argument vector and captures its output.
pub trait GitRunner {
    /// Run `git` with `args`.
    ///
    /// Returns `Err` only when the command could not be run at all.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

impl<F> GitRunner for F
where
    F: Fn(&[&str]) -> Result<GitOutput>,
{
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        self(args)
    }
}

/// Spawns the system `git` executable.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    /// Working directory for git (None = inherit).
    cwd: Option<PathBuf>,
}

impl SystemGit {
    /// Create a runner that uses the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let mut cmd = Command::new("git");
        cmd.args(args);

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| CovmetaError::VcsInvocation {
            command: display_command(args),
            reason: format!("could not run git: {e}"),
        })?;

        Ok(GitOutput {
            exit_code: output.status.code(),
            // Non-UTF-8 output is unusable as a branch, commit or URL
            stdout: String::from_utf8(output.stdout).ok(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

/// Run a git command and return its trimmed stdout.
///
/// Fails when the command cannot be run, exits unsuccessfully, or
/// produces no usable output. A missing stdout is a failure even when
/// the exit status reports success.
pub fn capture<R: GitRunner + ?Sized>(runner: &R, args: &[&str]) -> Result<String> {
    let command = display_command(args);
    tracing::debug!("Running {}", command);

    let output = runner.run(args)?;

    if !output.success {
        let stderr = output.stderr.trim();
        let reason = match (output.exit_code, stderr.is_empty()) {
            (Some(code), true) => format!("exited with code {code}"),
            (Some(code), false) => format!("exited with code {code}: {stderr}"),
            (None, true) => "terminated without an exit code".to_string(),
            (None, false) => format!("terminated without an exit code: {stderr}"),
        };
        return Err(CovmetaError::VcsInvocation { command, reason });
    }

    let Some(stdout) = output.stdout else {
        return Err(CovmetaError::VcsInvocation {
            command,
            reason: "no output was captured".to_string(),
        });
    };

    let value = stdout.trim();
    if value.is_empty() {
        return Err(CovmetaError::VcsInvocation {
            command,
            reason: "output was empty".to_string(),
        });
    }

    tracing::debug!("{} -> {}", command, value);
    Ok(value.to_string())
}

fn display_command(args: &[&str]) -> String {
    std::iter::once("git")
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
