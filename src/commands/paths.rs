//! `airnet paths` and `airnet route`
use std::io::Write;

use serde::Serialize;

use airnet_core::error::Result;
use airnet_core::format::OutputFormat;
use airnet_core::graph::{shortest_paths, Distance, NodeId};
use airnet_core::records;

use crate::commands::{NodeRef, Session};

#[derive(Serialize)]
struct DistanceEntry {
    #[serde(flatten)]
    node: NodeRef,
    distance: Option<Distance>,
}

pub fn execute_paths(session: &Session, out: &mut dyn Write, start: &str) -> Result<()> {
    let start = session.resolve(start)?;
    let paths = shortest_paths(&session.graph, start)?;

    match session.format {
        OutputFormat::Human => {
            writeln!(
                out,
                "\nShortest Paths from {}:",
                session.config.label(start)
            )?;
            let from = session.short_name(start);
            for (node, distance) in paths.iter() {
                let cost = distance.map_or_else(|| "inf".to_string(), |d| d.to_string());
                writeln!(out, "{} -> {} : {}", from, session.short_name(node), cost)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let distances: Vec<DistanceEntry> = paths
                .iter()
                .map(|(node, distance)| DistanceEntry {
                    node: session.node_ref(node),
                    distance,
                })
                .collect();
            let output = serde_json::json!({
                "start": start,
                "distances": distances,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "{}", records::header_line(&session.config.name, "paths"))?;
            for (node, distance) in paths.iter() {
                writeln!(out, "{}", records::distance_line(node, distance))?;
            }
        }
    }

    Ok(())
}

pub fn execute_route(session: &Session, out: &mut dyn Write, from: &str, to: &str) -> Result<()> {
    let from = session.resolve(from)?;
    let to = session.resolve(to)?;
    let paths = shortest_paths(&session.graph, from)?;
    session.graph.check_node(to)?;

    let route: Option<(Vec<NodeId>, Distance)> = paths.path_to(to).zip(paths.distance(to));
    tracing::debug!(from, to, found = route.is_some(), "route");

    match session.format {
        OutputFormat::Human => match &route {
            Some((path, cost)) => {
                writeln!(
                    out,
                    "\nRoute {} -> {} ({} minutes):",
                    session.short_name(from),
                    session.short_name(to),
                    cost
                )?;
                for &node in path {
                    writeln!(out, "  {}", session.config.label(node))?;
                }
                writeln!(out)?;
            }
            None => writeln!(
                out,
                "No route from {} to {}",
                session.config.label(from),
                session.config.label(to)
            )?,
        },
        OutputFormat::Json => {
            let path: Vec<NodeRef> = route
                .as_ref()
                .map(|(path, _)| path.iter().map(|&n| session.node_ref(n)).collect())
                .unwrap_or_default();
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": route.is_some(),
                "cost": route.as_ref().map(|(_, cost)| *cost),
                "path": path,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "{}", records::header_line(&session.config.name, "route"))?;
            writeln!(out, "{}", records::distance_line(to, paths.distance(to)))?;
            if let Some((path, _)) = &route {
                writeln!(out, "{}", records::path_line(path))?;
            }
        }
    }

    Ok(())
}
