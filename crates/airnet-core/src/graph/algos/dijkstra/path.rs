//! Route reconstruction from Dijkstra predecessors

use crate::graph::types::NodeId;

/// Walk predecessors back from `to` until `from`, returning the route in
/// travel order. Callers only pass nodes already known to be reachable.
pub fn reconstruct_path(from: NodeId, to: NodeId, predecessors: &[Option<NodeId>]) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        match predecessors.get(current).copied().flatten() {
            Some(pred) => {
                current = pred;
                path.push(current);
            }
            None => break,
        }
    }

    path.reverse();
    path
}
