//! CLI argument parsing for airnet
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use airnet_core::format::OutputFormat;
use parse::parse_output_format;

/// Airnet - explore a weighted airport route network
#[derive(Parser, Debug)]
#[command(name = "airnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition file (TOML); defaults to the built-in airport network
    #[arg(long, global = true)]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "human",
        env = "AIRNET_FORMAT",
        value_parser = parse_output_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, airnet_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every airport and its connections
    Network,

    /// Depth-first route from a start airport
    Dfs {
        /// Start node (index or airport code)
        #[arg(long, short, default_value = "0")]
        start: String,
    },

    /// Breadth-first layers from a start airport
    Bfs {
        /// Start node (index or airport code)
        #[arg(long, short, default_value = "0")]
        start: String,
    },

    /// Shortest travel time from a start airport to every airport
    Paths {
        /// Start node (index or airport code)
        #[arg(long, short, default_value = "0")]
        start: String,
    },

    /// Cheapest route between two airports
    Route {
        /// Origin (index or airport code)
        from: String,
        /// Destination (index or airport code)
        to: String,
    },

    /// Minimum spanning tree of the network
    Mst {
        /// Root node (index or airport code)
        #[arg(long, short, default_value = "0")]
        root: String,
    },

    /// Interactive numbered menu (default when no command is given)
    Menu,
}
