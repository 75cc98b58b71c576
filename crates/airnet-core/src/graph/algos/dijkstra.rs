mod path;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::shared::check_start;
use crate::graph::types::{Distance, NodeId, INFINITY};
use crate::graph::GraphProvider;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance, then node)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub distance: Distance,
    pub node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Minimal cumulative weights from one start node to every node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    start: NodeId,
    distances: Vec<Distance>,
    #[serde(skip)]
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Distance to `node`, or `None` if it is unreachable or out of range
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node).copied().filter(|&d| d != INFINITY)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Distances indexed by node, with [`INFINITY`] for unreachable nodes
    pub fn raw_distances(&self) -> &[Distance] {
        &self.distances
    }

    /// `(node, distance)` for every node, `None` meaning unreachable
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<Distance>)> + '_ {
        (0..self.distances.len()).map(|node| (node, self.distance(node)))
    }

    /// Node through which `node` was last improved
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Route from the start node to `node`, both ends included.
    ///
    /// `None` when `node` is unreachable.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(node) {
            return None;
        }
        Some(path::reconstruct_path(self.start, node, &self.predecessors))
    }
}

/// Compute shortest distances from `start` with Dijkstra's algorithm.
///
/// There is no decrease-key: improved distances are pushed again and stale
/// heap entries are skipped when popped.
#[tracing::instrument(skip(provider), fields(node_count = provider.node_count()))]
pub fn shortest_paths(provider: &dyn GraphProvider, start: NodeId) -> Result<ShortestPaths> {
    check_start(provider, start)?;

    let node_count = provider.node_count();
    let mut distances = vec![INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distances[start] = 0;
    heap.push(Reverse(HeapEntry {
        distance: 0,
        node: start,
    }));

    let mut pops = 0usize;
    let mut stale = 0usize;

    while let Some(Reverse(HeapEntry { distance, node })) = heap.pop() {
        pops += 1;
        if distance > distances[node] {
            stale += 1;
            continue;
        }

        for adj in provider.adjacency(node) {
            let candidate = distances[node].saturating_add(Distance::from(adj.weight));
            if candidate < distances[adj.node] {
                tracing::trace!(
                    from = node,
                    to = adj.node,
                    old = distances[adj.node],
                    new = candidate,
                    "relax"
                );
                distances[adj.node] = candidate;
                predecessors[adj.node] = Some(node);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    node: adj.node,
                }));
            }
        }
    }

    tracing::debug!(
        start,
        pops,
        stale,
        reachable = distances.iter().filter(|&&d| d != INFINITY).count(),
        "dijkstra_done"
    );

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
    })
}
