//! `airnet mst` - minimum spanning tree
use std::io::Write;

use airnet_core::error::Result;
use airnet_core::format::OutputFormat;
use airnet_core::graph::minimum_spanning_tree_from;
use airnet_core::records;

use crate::commands::Session;

pub fn execute(session: &Session, out: &mut dyn Write, root: &str) -> Result<()> {
    let root = session.resolve(root)?;
    let tree = minimum_spanning_tree_from(&session.graph, root)?;
    let unreachable = tree.unreachable();

    if !tree.is_spanning() {
        tracing::warn!(
            root,
            unreachable = unreachable.len(),
            "network is disconnected; spanning tree is partial"
        );
    }

    match session.format {
        OutputFormat::Human => {
            writeln!(out, "\nMinimum Spanning Tree:")?;
            for edge in tree.edges() {
                writeln!(
                    out,
                    "{} - {} (cost: {})",
                    session.short_name(edge.parent),
                    session.short_name(edge.child),
                    edge.weight
                )?;
            }
            writeln!(out, "Total cost: {}", tree.total_weight())?;
            if !unreachable.is_empty() {
                let names: Vec<String> =
                    unreachable.iter().map(|&n| session.short_name(n)).collect();
                writeln!(out, "Unreachable: {}", names.join(", "))?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "root": tree.root(),
                "edges": tree.edges(),
                "total_weight": tree.total_weight(),
                "spanning": tree.is_spanning(),
                "unreachable": unreachable,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "{}", records::header_line(&session.config.name, "mst"))?;
            for edge in tree.edges() {
                writeln!(
                    out,
                    "{}",
                    records::edge_line(edge.parent, edge.child, edge.weight)
                )?;
            }
            for node in unreachable {
                writeln!(out, "{}", records::distance_line(node, None))?;
            }
        }
    }

    Ok(())
}
