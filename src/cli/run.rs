//! The resolve command.
//!
//! Detects a provider for the environment snapshot, resolves the build
//! metadata and renders it for stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::environment::EnvironmentMap;
use crate::error::Result;
use crate::providers::{self, ServiceParams, UploaderInputs};
use crate::vcs::{GitRunner, SystemGit};

use super::args::Cli;

/// How the resolved parameters are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `key: value` line per field.
    #[default]
    Human,
    /// Pretty-printed JSON object.
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Resolve parameters for the given CLI arguments and environment.
pub fn run(cli: &Cli, envs: EnvironmentMap, git: &dyn GitRunner) -> Result<String> {
    let inputs = UploaderInputs::new(cli.override_args(), envs);
    let providers = providers::builtin_providers();
    let params = providers::resolve(&providers, &inputs, git)?;
    render(&params, OutputFormat::from_cli(cli))
}

/// Build the git runner, honoring `--dir`.
pub fn git_runner(cli: &Cli) -> Result<SystemGit> {
    match &cli.dir {
        Some(dir) => Ok(SystemGit::in_dir(working_dir(dir)?)),
        None => Ok(SystemGit::new()),
    }
}

fn working_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!("Working directory {} does not exist", dir.display());
    }
    Ok(dir.to_path_buf())
}

/// Write rendered output followed by a newline.
pub fn write_output<W: Write>(out: &mut W, output: &str) -> Result<()> {
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

/// Render resolved parameters.
pub fn render(params: &ServiceParams, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(params)?),
        OutputFormat::Human => Ok(params
            .fields()
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
