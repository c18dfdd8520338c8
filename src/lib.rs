//! # `graphwalk` - Adjacency-Matrix Graph Toolkit
//!
//! Undirected, unweighted graphs stored as bit-packed adjacency matrices, with
//! the classic traversal algorithms layered on top.
//!
//! ## Key Features
//!
//! - **Bit-packed storage**: one `u64`-word row per vertex gives \(O(1)\) edge
//!   lookup and ascending neighbor scans that skip empty words.
//! - **Lazy traversals**: [`Dfs`] and [`Bfs`] are iterators; nothing is
//!   collected unless the caller asks.
//! - **Path search**: backtracking DFS paths and BFS shortest paths.
//! - **Cluster analysis**: connected components with size statistics.
//! - **No shared traversal state**: every call owns its visitation set, so
//!   searches never contaminate each other or the graph.
//!
//! ## Architecture
//!
//! 1. **Graph** ([`UndirectedGraph`]): vertex count fixed at creation (may grow
//!    by [`add_vertex`](UndirectedGraph::add_vertex)), bounded by the `MAX`
//!    const parameter. Mutated only by edge insertion.
//! 2. **Traversal** ([`graph::traversal`]): DFS in recursive and explicit-stack
//!    forms with identical visiting order, and BFS.
//! 3. **Paths** ([`graph::path`]): built on the traversal patterns.
//! 4. **Components** ([`graph::components`]): repeated DFS from unvisited seeds.
//!
//! ### Ordering guarantees
//!
//! Neighbors are always explored in ascending index order. DFS yields a
//! preorder; a component lists its seed first; the DFS path is the first one
//! found under that order.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{Graph, GraphError};
//!
//! let mut g = Graph::new(7)?;
//! g.add_edge(0, 1)?;
//! g.add_edge(1, 2)?;
//! g.add_edge(3, 4)?;
//!
//! let clusters = g.components();
//! assert_eq!(clusters.len(), 4);
//! assert!(!g.is_connected());
//!
//! assert_eq!(g.dfs(0)?.collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(g.shortest_path(0, 2)?.hops(), 2);
//! assert_eq!(g.shortest_path(0, 3), Err(GraphError::NoPath { start: 0, end: 3 }));
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::BitSet;
pub use error::{GraphError, Result};
pub use graph::{
    bfs_levels, connected_components, dfs_path, dfs_path_iterative, dfs_recursive, distances,
    is_connected, shortest_path, Bfs, ClassicGraph, ClusterReport, ComponentStats,
    ComponentSummary, Components, Dfs, Graph, GraphDescription, Path, UndirectedGraph,
};

// Compile-time checks on the graph's public bounds.
const _: () = {
    assert!(graph::CLASSIC_MAX_VERTICES == 20);
    assert!(graph::CLASSIC_MAX_VERTICES <= graph::DEFAULT_MAX_VERTICES);
    assert!(ClassicGraph::MAX_VERTICES == graph::CLASSIC_MAX_VERTICES);
    // Path is a thin wrapper around its vertex list.
    assert!(core::mem::size_of::<Path>() == core::mem::size_of::<Vec<usize>>());
};
