//! Utilities for records output format
//!
//! Every line starts with a one-letter tag:
//! - `H` header: format version, network name, command
//! - `N` node: index, code, quoted label (plus `depth=` for BFS)
//! - `E` edge: endpoints and weight
//! - `D` distance: node and cost, `-` when unreachable
//! - `P` path: node indices in travel order

use crate::graph::{Distance, NodeId, Weight};

pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

pub fn header_line(network: &str, command: &str) -> String {
    format!(
        "H airnet={} network=\"{}\" command={}",
        RECORDS_VERSION,
        escape_quotes(network),
        command
    )
}

pub fn node_line(node: NodeId, code: Option<&str>, label: &str) -> String {
    format!(
        "N {} {} \"{}\"",
        node,
        code.unwrap_or("-"),
        escape_quotes(label)
    )
}

pub fn edge_line(from: NodeId, to: NodeId, weight: Weight) -> String {
    format!("E {} {} weight={}", from, to, weight)
}

pub fn distance_line(node: NodeId, distance: Option<Distance>) -> String {
    match distance {
        Some(d) => format!("D {} {}", node, d),
        None => format!("D {} -", node),
    }
}

pub fn path_line(path: &[NodeId]) -> String {
    let nodes: Vec<String> = path.iter().map(|n| n.to_string()).collect();
    format!("P {}", nodes.join(" "))
}
