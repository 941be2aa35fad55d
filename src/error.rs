//! Error types for covmeta operations.
//!
//! This module defines [`CovmetaError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Each resolution failure has its own variant carrying the command or
//!   URL involved, so callers can report exactly what went wrong
//! - Nothing is retried; the first error aborts the whole resolution
//! - Use `anyhow::Error` (via `CovmetaError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for covmeta operations.
#[derive(Debug, Error)]
pub enum CovmetaError {
    /// A version-control command could not be run, exited abnormally,
    /// or produced no usable output.
    #[error("Git command `{command}` failed: {reason}")]
    VcsInvocation { command: String, reason: String },

    /// A remote URL could not be reduced to an `owner/repo` slug.
    #[error("Unable to parse slug from remote URL '{url}': {reason}")]
    SlugParse { url: String, reason: String },

    /// No provider in the list applies to the current environment.
    #[error("No provider detected for the current environment")]
    NoProviderDetected,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for covmeta operations.
pub type Result<T> = std::result::Result<T, CovmetaError>;
