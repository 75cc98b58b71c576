use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::shared::{check_start, Visited};
use crate::graph::types::{Distance, NodeId, TreeEdge, Weight, INFINITY};
use crate::graph::GraphProvider;

/// Minimum spanning tree (or forest component) grown from a root node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    root: NodeId,
    edges: Vec<TreeEdge>,
    reachable: Vec<bool>,
}

impl SpanningTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// One entry per reached non-root node, ordered by child index
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Sum of the tree edge weights. At most `node_count - 1` edges, so this
    /// cannot overflow.
    pub fn total_weight(&self) -> Distance {
        self.edges.iter().map(|e| Distance::from(e.weight)).sum()
    }

    /// Whether `node` was connected to the root
    pub fn reachable(&self, node: NodeId) -> bool {
        self.reachable.get(node).copied().unwrap_or(false)
    }

    /// Nodes the tree could not reach from the root
    pub fn unreachable(&self) -> Vec<NodeId> {
        self.reachable
            .iter()
            .enumerate()
            .filter(|(_, &r)| !r)
            .map(|(node, _)| node)
            .collect()
    }

    /// True iff every node of the graph is in the tree
    pub fn is_spanning(&self) -> bool {
        self.reachable.iter().all(|&r| r)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.edges
            .iter()
            .find(|e| e.child == node)
            .map(|e| e.parent)
    }
}

/// Prim's algorithm rooted at node 0
pub fn minimum_spanning_tree(provider: &dyn GraphProvider) -> Result<SpanningTree> {
    minimum_spanning_tree_from(provider, 0)
}

/// Array-based Prim's algorithm, O(N²).
///
/// Each round selects the node outside the tree with the smallest finite key;
/// ties go to the lowest index. When no remaining node has a finite key the
/// rest of the graph is unreachable and the tree is returned as is.
#[tracing::instrument(skip(provider), fields(node_count = provider.node_count()))]
pub fn minimum_spanning_tree_from(
    provider: &dyn GraphProvider,
    root: NodeId,
) -> Result<SpanningTree> {
    check_start(provider, root)?;

    let node_count = provider.node_count();
    // Keys are distances so that INFINITY stays above every edge weight
    let mut key: Vec<Distance> = vec![INFINITY; node_count];
    let mut parent: Vec<Option<(NodeId, Weight)>> = vec![None; node_count];
    let mut in_tree = Visited::new(node_count);

    key[root] = 0;

    // N rounds so the final node is marked too; its key is settled before then
    for _ in 0..node_count {
        let Some(u) = select_min_key(&key, &in_tree) else {
            tracing::debug!(
                root,
                reached = in_tree.count(),
                node_count,
                "mst_disconnected"
            );
            break;
        };
        in_tree.insert(u);

        for adj in provider.adjacency(u) {
            let weight = Distance::from(adj.weight);
            if !in_tree.contains(adj.node) && weight < key[adj.node] {
                key[adj.node] = weight;
                parent[adj.node] = Some((u, adj.weight));
            }
        }
    }

    let edges: Vec<TreeEdge> = parent
        .iter()
        .enumerate()
        .filter_map(|(child, p)| {
            p.filter(|_| in_tree.contains(child))
                .map(|(parent, weight)| TreeEdge {
                    parent,
                    child,
                    weight,
                })
        })
        .collect();

    let reachable = (0..node_count).map(|n| in_tree.contains(n)).collect();

    let tree = SpanningTree {
        root,
        edges,
        reachable,
    };
    tracing::debug!(
        root,
        edges = tree.edges.len(),
        total_weight = tree.total_weight(),
        "mst_done"
    );
    Ok(tree)
}

/// Linear scan for the lowest finite key outside the tree
fn select_min_key(key: &[Distance], in_tree: &Visited) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    for (node, &k) in key.iter().enumerate() {
        if in_tree.contains(node) || k == INFINITY {
            continue;
        }
        if best.is_none_or(|b| k < key[b]) {
            best = Some(node);
        }
    }
    best
}
