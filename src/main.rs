//! covmeta CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use covmeta::cli::{git_runner, run, write_output, Cli};
use covmeta::environment::EnvironmentMap;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout only carries the resolved parameters.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("covmeta=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("covmeta=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("covmeta starting with args: {:?}", cli);

    let envs = EnvironmentMap::from_process();
    let result = git_runner(&cli)
        .and_then(|git| run(&cli, envs, &git))
        .and_then(|output| write_output(&mut std::io::stdout().lock(), &output));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
