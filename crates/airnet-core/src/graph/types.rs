use serde::Serialize;

/// Index of a node in `[0, node_count)`
pub type NodeId = usize;

/// Non-negative edge weight (minutes of flight time for the airport network)
pub type Weight = u32;

/// Cumulative path cost or spanning-tree total.
///
/// Twice as wide as [`Weight`]: a simple path over at most `u32::MAX + 1`
/// nodes sums to less than [`INFINITY`], so the sentinel never collides with
/// a real cost.
pub type Distance = u64;

/// Distance sentinel for nodes that cannot be reached
pub const INFINITY: Distance = Distance::MAX;

/// An input edge. Stored undirected: building a graph inserts both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub src: NodeId,
    pub dest: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: NodeId, dest: NodeId, weight: Weight) -> Self {
        Self { src, dest, weight }
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((src, dest, weight): (NodeId, NodeId, Weight)) -> Self {
        Self { src, dest, weight }
    }
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    pub node: NodeId,
    pub weight: Weight,
}

/// Spanning tree entry connecting `child` to the tree through `parent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub weight: Weight,
}
