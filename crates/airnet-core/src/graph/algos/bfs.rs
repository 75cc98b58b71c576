use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::{check_start, Visited};
use crate::graph::types::NodeId;
use crate::graph::GraphProvider;

/// Lazy breadth-first traversal, yielding nodes in hop-distance order.
///
/// Nodes are marked visited when enqueued, so each node enters the queue at
/// most once.
pub struct Bfs<'a> {
    provider: &'a dyn GraphProvider,
    visited: Visited,
    queue: VecDeque<(NodeId, usize)>,
}

impl Bfs<'_> {
    /// Like `next`, but also returns the hop count from the start node
    pub fn next_with_depth(&mut self) -> Option<(NodeId, usize)> {
        let (node, depth) = self.queue.pop_front()?;

        for adj in self.provider.adjacency(node) {
            if self.visited.insert(adj.node) {
                self.queue.push_back((adj.node, depth + 1));
            }
        }

        tracing::trace!(node, depth, queue = self.queue.len(), "bfs_visit");
        Some((node, depth))
    }
}

impl Iterator for Bfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.next_with_depth().map(|(node, _)| node)
    }
}

/// Start a breadth-first traversal from `start`
#[tracing::instrument(skip(provider), fields(node_count = provider.node_count()))]
pub fn bfs(provider: &dyn GraphProvider, start: NodeId) -> Result<Bfs<'_>> {
    check_start(provider, start)?;

    let mut visited = Visited::new(provider.node_count());
    visited.insert(start);

    let mut queue = VecDeque::new();
    queue.push_back((start, 0));

    Ok(Bfs {
        provider,
        visited,
        queue,
    })
}

/// BFS order grouped by hop count: `layers[d]` holds the nodes `d` hops away
pub fn bfs_layers(provider: &dyn GraphProvider, start: NodeId) -> Result<Vec<Vec<NodeId>>> {
    let mut walk = bfs(provider, start)?;
    let mut layers: Vec<Vec<NodeId>> = Vec::new();

    while let Some((node, depth)) = walk.next_with_depth() {
        if layers.len() <= depth {
            layers.push(Vec::new());
        }
        layers[depth].push(node);
    }

    tracing::debug!(start, layers = layers.len(), "bfs_layers");
    Ok(layers)
}
