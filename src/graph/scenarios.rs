//! Canned graphs used by the demo binary, tests and benchmarks.

use crate::error::Result;
use crate::graph::adjacency_matrix::{ClassicGraph, GraphDescription};

/// A named example graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Short identifier, used on the command line.
    pub name: &'static str,
    /// Human-readable heading.
    pub title: &'static str,
    /// Number of vertices.
    pub vertices: usize,
    /// Undirected edges.
    pub edges: &'static [(usize, usize)],
    /// Start/end pairs worth running the path finders on.
    pub routes: &'static [(usize, usize)],
}

impl Scenario {
    /// Builds the graph.
    ///
    /// # Errors
    /// Only if the scenario table itself is malformed.
    pub fn build(&self) -> Result<ClassicGraph> {
        ClassicGraph::from_edges(self.vertices, self.edges.iter().copied())
    }

    /// The scenario as a serializable description.
    pub fn description(&self) -> GraphDescription {
        GraphDescription {
            vertices: self.vertices,
            edges: self.edges.to_vec(),
        }
    }
}

/// Three small chains and singletons: `0-1-2`, `3-4`, `5`, `6`.
pub const SIMPLE_DISCONNECTED: Scenario = Scenario {
    name: "simple",
    title: "Simple Disconnected Graph",
    vertices: 7,
    edges: &[(0, 1), (1, 2), (3, 4)],
    routes: &[(0, 2)],
};

/// Friend groups: a 4-cycle, a triangle, a pair and one loner.
pub const SOCIAL_NETWORK: Scenario = Scenario {
    name: "social",
    title: "Social Network (Friend Groups)",
    vertices: 10,
    edges: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 4),
        (7, 8),
    ],
    routes: &[(0, 2)],
};

/// Office ring, lab chain, server pair and two offline machines.
pub const NETWORK_TOPOLOGY: Scenario = Scenario {
    name: "network",
    title: "Computer Network Topology",
    vertices: 12,
    edges: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 0),
        (5, 6),
        (6, 7),
        (8, 9),
    ],
    routes: &[(0, 3)],
};

/// A connected graph with several routes of different lengths from 0 to 7.
pub const SHORTEST_PATH: Scenario = Scenario {
    name: "paths",
    title: "Shortest Path Search",
    vertices: 8,
    edges: &[
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 5),
        (4, 5),
        (5, 6),
        (5, 7),
    ],
    routes: &[(0, 7), (0, 6), (1, 4)],
};

/// Six vertices with a few cycles; DFS and BFS visit them in different orders.
pub const TRAVERSAL: Scenario = Scenario {
    name: "traversal",
    title: "Basic DFS and BFS Traversal",
    vertices: 6,
    edges: &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4), (3, 4), (3, 5)],
    routes: &[],
};

/// A complete binary tree of depth two rooted at 0.
pub const TREE: Scenario = Scenario {
    name: "tree",
    title: "Level-wise BFS (Tree Structure)",
    vertices: 7,
    edges: &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)],
    routes: &[],
};

/// Every scenario, in presentation order.
pub const ALL: [Scenario; 6] = [
    SIMPLE_DISCONNECTED,
    SOCIAL_NETWORK,
    NETWORK_TOPOLOGY,
    SHORTEST_PATH,
    TRAVERSAL,
    TREE,
];

/// Looks a scenario up by [`name`](Scenario::name).
pub fn by_name(name: &str) -> Option<Scenario> {
    ALL.into_iter().find(|s| s.name == name)
}
