//! `airnet network` - list every airport and its connections
use std::io::Write;

use serde::Serialize;

use airnet_core::error::Result;
use airnet_core::format::OutputFormat;
use airnet_core::graph::{NodeId, Weight};
use airnet_core::records;

use crate::commands::{NodeRef, Session};

#[derive(Serialize)]
struct NeighborEntry {
    node: NodeId,
    weight: Weight,
}

#[derive(Serialize)]
struct NodeEntry {
    #[serde(flatten)]
    node: NodeRef,
    neighbors: Vec<NeighborEntry>,
}

pub fn execute(session: &Session, out: &mut dyn Write) -> Result<()> {
    let graph = &session.graph;

    match session.format {
        OutputFormat::Human => {
            writeln!(out, "\n{}:\n", session.config.name)?;
            for node in 0..graph.node_count() {
                writeln!(out, "{} connects to:", session.config.label(node))?;
                for adj in graph.neighbors(node)? {
                    writeln!(
                        out,
                        "  → {} ({} minutes)",
                        session.config.label(adj.node),
                        adj.weight
                    )?;
                }
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            let nodes = (0..graph.node_count())
                .map(|node| {
                    Ok(NodeEntry {
                        node: session.node_ref(node),
                        neighbors: graph
                            .neighbors(node)?
                            .iter()
                            .map(|adj| NeighborEntry {
                                node: adj.node,
                                weight: adj.weight,
                            })
                            .collect(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let output = serde_json::json!({
                "name": session.config.name,
                "node_count": graph.node_count(),
                "nodes": nodes,
                "edges": graph.edges(),
                "total_weight": graph.total_weight(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "{}", records::header_line(&session.config.name, "network"))?;
            for node in 0..graph.node_count() {
                writeln!(
                    out,
                    "{}",
                    records::node_line(node, session.config.code(node), &session.config.label(node))
                )?;
            }
            for edge in graph.edges() {
                writeln!(out, "{}", records::edge_line(edge.src, edge.dest, edge.weight))?;
            }
        }
    }

    Ok(())
}
