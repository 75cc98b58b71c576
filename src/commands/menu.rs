//! Interactive numbered menu
use std::io::{BufRead, Write};

use airnet_core::error::Result;

use crate::commands::{mst, network, paths, traverse, Session};

/// Node every menu action starts from
const MENU_START: &str = "0";

fn print_menu(session: &Session, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n{} Menu:", session.config.name)?;
    writeln!(out, "[1] Display network")?;
    writeln!(out, "[2] DFS")?;
    writeln!(out, "[3] BFS")?;
    writeln!(out, "[4] Shortest paths")?;
    writeln!(out, "[5] Minimum Spanning Tree")?;
    writeln!(out, "[0] Exit")?;
    write!(out, "Choice: ")?;
    out.flush()?;
    Ok(())
}

/// Read choices until `0` or end of input
pub fn execute(
    session: &Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    quiet: bool,
) -> Result<()> {
    let mut line = String::new();

    loop {
        if !quiet {
            print_menu(session, out)?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("menu_eof");
            break;
        }

        let choice = line.trim();
        tracing::debug!(choice, "menu_choice");

        match choice {
            "1" => network::execute(session, out)?,
            "2" => traverse::execute_dfs(session, out, MENU_START)?,
            "3" => traverse::execute_bfs(session, out, MENU_START)?,
            "4" => paths::execute_paths(session, out, MENU_START)?,
            "5" => mst::execute(session, out, MENU_START)?,
            "0" => break,
            _ => writeln!(out, "Invalid option.")?,
        }
    }

    Ok(())
}
