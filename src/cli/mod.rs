//! Command-line interface for covmeta.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Provider detection, resolution and output rendering

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{git_runner, render, run, write_output, OutputFormat};
