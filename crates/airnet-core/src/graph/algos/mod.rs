//! Graph algorithm implementations
//!
//! Each engine reads the graph through [`GraphProvider`](crate::graph::GraphProvider)
//! and owns all of its traversal state:
//! - `dfs`: explicit-stack depth-first traversal
//! - `bfs`: layer-order breadth-first traversal
//! - `dijkstra`: single-source shortest paths
//! - `prim`: array-based minimum spanning tree
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use bfs::{bfs, bfs_layers, Bfs};
pub use dfs::{dfs, Dfs};
pub use dijkstra::{shortest_paths, ShortestPaths};
pub use prim::{minimum_spanning_tree, minimum_spanning_tree_from, SpanningTree};
