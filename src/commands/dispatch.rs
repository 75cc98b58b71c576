//! Command dispatch logic for airnet
use std::io::{self, Write};
use std::time::Instant;

use airnet_core::config::NetworkConfig;
use airnet_core::error::Result;
use airnet_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{menu, mst, network, paths, traverse, Session};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let (config, source) = NetworkConfig::discover(cli.network.as_deref())?;
    tracing::debug!(source = %source, name = %config.name, "network_source");

    let session = Session::new(config, cli.format)?;
    trace_time!(start, "load_network", nodes = session.graph.node_count());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Network) => network::execute(&session, &mut out)?,
        Some(Commands::Dfs { start }) => traverse::execute_dfs(&session, &mut out, start)?,
        Some(Commands::Bfs { start }) => traverse::execute_bfs(&session, &mut out, start)?,
        Some(Commands::Paths { start }) => paths::execute_paths(&session, &mut out, start)?,
        Some(Commands::Route { from, to }) => {
            paths::execute_route(&session, &mut out, from, to)?
        }
        Some(Commands::Mst { root }) => mst::execute(&session, &mut out, root)?,
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            menu::execute(&session, &mut stdin.lock(), &mut out, cli.quiet)?
        }
    }

    out.flush()?;
    trace_time!(start, "command_done");
    Ok(())
}
