//! Airnet - route network explorer
//!
//! Loads an airport network and runs depth-first search, breadth-first
//! search, shortest paths or a minimum spanning tree over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use airnet_core::error::{AirnetError, ExitCode as AirnetExitCode};
use airnet_core::format::OutputFormat;
use airnet_core::logging;
use cli::Cli;

/// Same variable clap reads for `--format`
const FORMAT_ENV_VAR: &str = "AIRNET_FORMAT";

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), format = %cli.format, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(AirnetExitCode::Success as u8),
        Err(e) => {
            if cli.format.structured_errors() {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// clap failed, so `cli.format` is unknown. Scripts asking for JSON still
/// get the JSON envelope; help and version always print normally.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let format = early_format(env::args().skip(1), env::var(FORMAT_ENV_VAR).ok().as_deref());
    if !format.is_some_and(OutputFormat::structured_errors) {
        err.exit();
    }

    let error = AirnetError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Output format requested on the command line, read without clap.
///
/// The last `--format` wins, like clap; the environment variable applies only
/// when no flag is present. Unparseable values yield `None`.
fn early_format(
    args: impl IntoIterator<Item = String>,
    env_value: Option<&str>,
) -> Option<OutputFormat> {
    let mut requested: Option<String> = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if arg == "--format" {
            requested = args.next();
        } else if let Some(value) = arg.strip_prefix("--format=") {
            requested = Some(value.to_string());
        }
    }

    requested
        .as_deref()
        .or(env_value)
        .and_then(|value| value.parse().ok())
}
