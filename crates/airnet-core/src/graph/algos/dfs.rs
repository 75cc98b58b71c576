use crate::error::Result;
use crate::graph::algos::shared::{check_start, Visited};
use crate::graph::types::NodeId;
use crate::graph::GraphProvider;

/// Lazy depth-first traversal, yielding nodes in preorder.
///
/// A node is marked visited when it is popped from the stack. Neighbors that
/// are already marked at push time are skipped; anything marked between push
/// and pop is discarded on pop.
pub struct Dfs<'a> {
    provider: &'a dyn GraphProvider,
    visited: Visited,
    stack: Vec<NodeId>,
}

impl Iterator for Dfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node) {
                continue;
            }

            // Reverse push so the first-listed neighbor is popped first
            for adj in self.provider.adjacency(node).iter().rev() {
                if !self.visited.contains(adj.node) {
                    self.stack.push(adj.node);
                }
            }

            tracing::trace!(node, stack = self.stack.len(), "dfs_visit");
            return Some(node);
        }
        None
    }
}

/// Start a depth-first traversal from `start`
#[tracing::instrument(skip(provider), fields(node_count = provider.node_count()))]
pub fn dfs(provider: &dyn GraphProvider, start: NodeId) -> Result<Dfs<'_>> {
    check_start(provider, start)?;

    Ok(Dfs {
        provider,
        visited: Visited::new(provider.node_count()),
        stack: vec![start],
    })
}
