//! covmeta - Build metadata for coverage uploads from a local checkout.
//!
//! When no CI system is present, covmeta works out the branch, commit and
//! repository slug for a coverage upload from git, letting the caller
//! override any of them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Environment variable snapshots
//! - [`error`] - Error types and result aliases
//! - [`providers`] - Provider detection and metadata resolution
//! - [`vcs`] - Git invocation and remote URL parsing
//!
//! # Example
//!
//! ```
//! use covmeta::environment::EnvironmentMap;
//! use covmeta::providers::{local, UploaderInputs};
//! use covmeta::vcs::StubGit;
//!
//! let git = StubGit::new()
//!     .with_stdout(&["rev-parse", "--abbrev-ref", "HEAD"], "main\n")
//!     .with_stdout(&["rev-parse", "HEAD"], "0a1b2c3\n")
//!     .with_stdout(&["config", "--get", "remote.origin.url"], "git@github.com:org/repo.git\n");
//!
//! let envs = EnvironmentMap::new();
//! assert!(local::detect(&envs));
//!
//! let inputs = UploaderInputs::new(Default::default(), envs);
//! let params = local::get_service_params(&inputs, &git).unwrap();
//! assert_eq!(params.branch, "main");
//! assert_eq!(params.slug, "org/repo");
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod providers;
pub mod vcs;

pub use error::{CovmetaError, Result};
