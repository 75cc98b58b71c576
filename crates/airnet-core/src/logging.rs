//! Diagnostics for airnet
//!
//! All logging goes to stderr so stdout stays parseable in the json and
//! records formats. The filter comes from the first source that parses:
//! `RUST_LOG`, then `AIRNET_LOG`, then the CLI flags (`--log-level`, or
//! `--verbose` for debug). The default shows warnings only, which is where
//! partial spanning trees are reported.

use std::fmt;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt as fmt_layer, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG` for a log filter
pub const LOG_ENV_VAR: &str = "AIRNET_LOG";

/// Log elapsed time since `$start` at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let graph = config.to_graph()?;
/// trace_time!(start, "load_network", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Where the active filter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    RustLog,
    AirnetLog,
    Flags,
}

impl fmt::Display for FilterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSource::RustLog => f.write_str("RUST_LOG"),
            FilterSource::AirnetLog => f.write_str(LOG_ENV_VAR),
            FilterSource::Flags => f.write_str("command line"),
        }
    }
}

/// Install the global subscriber for this process
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
    let (filter, source) = resolve_filter(
        std::env::var("RUST_LOG").ok().as_deref(),
        std::env::var(LOG_ENV_VAR).ok().as_deref(),
        level,
    );

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry
            .with(
                fmt_layer::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt_layer::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    tracing::trace!(%source, "log_filter");
    Ok(())
}

/// Pick the first filter that parses. Empty or malformed environment values
/// fall through to the next source.
fn resolve_filter(
    rust_log: Option<&str>,
    airnet_log: Option<&str>,
    level: &str,
) -> (EnvFilter, FilterSource) {
    let from_env = |value: Option<&str>| {
        value
            .filter(|v| !v.trim().is_empty())
            .and_then(|v| EnvFilter::try_new(v).ok())
    };

    if let Some(filter) = from_env(rust_log) {
        return (filter, FilterSource::RustLog);
    }
    if let Some(filter) = from_env(airnet_log) {
        return (filter, FilterSource::AirnetLog);
    }
    (EnvFilter::new(filter_directive(level)), FilterSource::Flags)
}

/// Expand a bare level (`debug`) into a filter for both airnet crates
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("airnet={level},airnet_core={level}")
    }
}
