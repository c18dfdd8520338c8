//! Undirected graphs and the algorithms that run over them.
//!
//! - `adjacency_matrix`: the bit-packed graph store
//! - `traversal`: lazy DFS/BFS iterators
//! - `path`: backtracking and shortest-path search
//! - `components`: connected components and their statistics
//! - `render`: text views for terminals and logs
//! - `scenarios`: ready-made example graphs

pub mod adjacency_matrix;
pub mod components;
pub mod path;
pub mod render;
pub mod scenarios;
pub mod traversal;

pub use adjacency_matrix::{
    ClassicGraph, Graph, GraphDescription, Neighbors, UndirectedGraph, CLASSIC_MAX_VERTICES,
    DEFAULT_MAX_VERTICES,
};
pub use components::{connected_components, is_connected, ComponentStats, ComponentSummary, Components};
pub use path::{dfs_path, dfs_path_iterative, distances, shortest_path, Path};
pub use render::{AdjacencyListing, ClusterReport, MatrixView};
pub use traversal::{bfs_levels, dfs_recursive, Bfs, Dfs};
