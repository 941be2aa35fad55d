//! Version-control access.
//!
//! - [`runner`] - Git invocation behind the [`GitRunner`] trait
//! - [`slug`] - `owner/repo` extraction from remote URLs
//! - [`stub`] - Scripted git runner for tests

pub mod runner;
pub mod slug;
pub mod stub;

pub use runner::{capture, GitOutput, GitRunner, SystemGit};
pub use slug::{parse_slug, Slug};
pub use stub::StubGit;
