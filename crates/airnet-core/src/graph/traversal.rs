use crate::graph::store::Graph;
use crate::graph::types::{Adjacent, NodeId};

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    fn node_count(&self) -> usize;
    /// Ordered adjacency of `node`. Callers only pass indices in `[0, node_count)`.
    fn adjacency(&self, node: NodeId) -> &[Adjacent];
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn adjacency(&self, node: NodeId) -> &[Adjacent] {
        self.adjacency_unchecked(node)
    }
}
