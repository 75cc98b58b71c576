//! Immutable adjacency-list graph store

use crate::error::{AirnetError, Result};
use crate::graph::types::{Adjacent, Distance, Edge, NodeId};

/// Weighted undirected graph, built once from an edge list.
///
/// Each node's adjacency keeps insertion order: edges in the order they were
/// supplied, with the reciprocal entry appended in the same pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Adjacent>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph with `node_count` nodes from `edges`.
    ///
    /// Fails with [`AirnetError::InvalidEdge`] if any endpoint is not in
    /// `[0, node_count)`. Nothing is built in that case.
    #[tracing::instrument(skip(edges), fields(edge_count = edges.len()))]
    pub fn build(edges: &[Edge], node_count: usize) -> Result<Self> {
        if let Some(bad) = edges
            .iter()
            .find(|e| e.src >= node_count || e.dest >= node_count)
        {
            return Err(AirnetError::invalid_edge(
                to_signed(bad.src),
                to_signed(bad.dest),
                node_count,
            ));
        }

        let mut adjacency: Vec<Vec<Adjacent>> = vec![Vec::new(); node_count];
        for edge in edges {
            adjacency[edge.src].push(Adjacent {
                node: edge.dest,
                weight: edge.weight,
            });
            adjacency[edge.dest].push(Adjacent {
                node: edge.src,
                weight: edge.weight,
            });
        }

        tracing::debug!(node_count, edge_count = edges.len(), "graph_built");

        Ok(Self {
            adjacency,
            edges: edges.to_vec(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges exactly as supplied to [`Graph::build`]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Fails with [`AirnetError::NodeOutOfRange`] unless `node` is in
    /// `[0, node_count)`
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(AirnetError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Ordered `(neighbor, weight)` entries of `node`
    pub fn neighbors(&self, node: NodeId) -> Result<&[Adjacent]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.neighbors(node).map(<[Adjacent]>::len)
    }

    /// Sum of all edge weights, saturating at [`Distance::MAX`]
    pub fn total_weight(&self) -> Distance {
        self.edges
            .iter()
            .fold(0, |acc: Distance, e| acc.saturating_add(Distance::from(e.weight)))
    }

    pub(crate) fn adjacency_unchecked(&self, node: NodeId) -> &[Adjacent] {
        &self.adjacency[node]
    }
}

fn to_signed(node: NodeId) -> i64 {
    i64::try_from(node).unwrap_or(i64::MAX)
}
