//! Weighted undirected graph and the algorithms that read it
//!
//! Provides the immutable graph store plus four independent engines:
//! - DFS and BFS traversal (lazy node iterators)
//! - Dijkstra single-source shortest paths
//! - Prim minimum spanning tree
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs, bfs_layers, dfs, minimum_spanning_tree, minimum_spanning_tree_from, shortest_paths, Bfs,
    Dfs, ShortestPaths, SpanningTree,
};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{Adjacent, Distance, Edge, NodeId, TreeEdge, Weight, INFINITY};
