//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::providers::OverrideArgs;

/// covmeta - Resolve branch, commit and slug for a coverage upload.
#[derive(Debug, Parser)]
#[command(name = "covmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Branch name (overrides `git rev-parse --abbrev-ref HEAD`)
    #[arg(short = 'B', long, env = "COVMETA_BRANCH", default_value = "")]
    pub branch: String,

    /// Pull request number
    #[arg(short = 'P', long, env = "COVMETA_PR", default_value = "")]
    pub pr: String,

    /// Commit SHA (overrides `git rev-parse HEAD`)
    #[arg(short = 'C', long, env = "COVMETA_SHA", default_value = "")]
    pub sha: String,

    /// Repository slug as owner/repo (overrides the origin remote)
    #[arg(short = 'r', long, env = "COVMETA_SLUG", default_value = "")]
    pub slug: String,

    /// Git tag
    #[arg(short = 'T', long, env = "COVMETA_TAG", default_value = "")]
    pub tag: String,

    /// Upload endpoint URL
    #[arg(short = 'u', long, env = "COVMETA_URL", default_value = "")]
    pub url: String,

    /// Uploader source identifier
    #[arg(short = 'Q', long, env = "COVMETA_SOURCE", default_value = "")]
    pub source: String,

    /// Comma-separated coverage flags
    #[arg(short = 'F', long, env = "COVMETA_FLAGS", default_value = "")]
    pub flags: String,

    /// Directory to run git in (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print the resolved parameters as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Collect the override arguments.
    pub fn override_args(&self) -> OverrideArgs {
        OverrideArgs {
            branch: self.branch.clone(),
            pr: self.pr.clone(),
            sha: self.sha.clone(),
            slug: self.slug.clone(),
            tag: self.tag.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            flags: self.flags.clone(),
        }
    }
}
