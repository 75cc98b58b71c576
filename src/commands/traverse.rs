//! `airnet dfs` and `airnet bfs`
use std::io::Write;

use serde::Serialize;

use airnet_core::error::Result;
use airnet_core::format::OutputFormat;
use airnet_core::graph::{bfs, dfs, NodeId};
use airnet_core::records;

use crate::commands::{NodeRef, Session};

#[derive(Serialize)]
struct VisitEntry {
    #[serde(flatten)]
    node: NodeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
}

pub fn execute_dfs(session: &Session, out: &mut dyn Write, start: &str) -> Result<()> {
    let start = session.resolve(start)?;
    let visits: Vec<(NodeId, Option<usize>)> =
        dfs(&session.graph, start)?.map(|n| (n, None)).collect();
    tracing::debug!(start, visited = visits.len(), "dfs");
    write_visits(session, out, "dfs", "DFS Route", start, &visits)
}

pub fn execute_bfs(session: &Session, out: &mut dyn Write, start: &str) -> Result<()> {
    let start = session.resolve(start)?;
    let mut walk = bfs(&session.graph, start)?;
    let mut visits: Vec<(NodeId, Option<usize>)> = Vec::new();
    while let Some((node, depth)) = walk.next_with_depth() {
        visits.push((node, Some(depth)));
    }
    tracing::debug!(start, visited = visits.len(), "bfs");
    write_visits(session, out, "bfs", "BFS Layers", start, &visits)
}

fn write_visits(
    session: &Session,
    out: &mut dyn Write,
    command: &str,
    title: &str,
    start: NodeId,
    visits: &[(NodeId, Option<usize>)],
) -> Result<()> {
    match session.format {
        OutputFormat::Human => {
            writeln!(out, "\n{} from {}:\n", title, session.config.label(start))?;
            for &(node, depth) in visits {
                match depth {
                    Some(d) => writeln!(out, "[{}] {}", d, session.config.label(node))?,
                    None => writeln!(out, "{}", session.config.label(node))?,
                }
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let order: Vec<VisitEntry> = visits
                .iter()
                .map(|&(node, depth)| VisitEntry {
                    node: session.node_ref(node),
                    depth,
                })
                .collect();
            let output = serde_json::json!({
                "algorithm": command,
                "start": start,
                "order": order,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "{}", records::header_line(&session.config.name, command))?;
            for &(node, depth) in visits {
                let line =
                    records::node_line(node, session.config.code(node), &session.config.label(node));
                match depth {
                    Some(d) => writeln!(out, "{} depth={}", line, d)?,
                    None => writeln!(out, "{}", line)?,
                }
            }
        }
    }
    Ok(())
}
