//! An undirected, unweighted graph stored as a bit-packed adjacency matrix.
//!
//! Each vertex owns one [`BitSet`] row; bit `j` of row `i` is set iff the edge
//! `{i, j}` exists. Rows are kept symmetric by every mutating operation.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) | Sets two bits |
//! | `has_edge` | \(O(1)\) | Single word probe |
//! | `neighbors` | \(O(n / 64 + \deg)\) | Scans the row word by word |
//! | `add_vertex` | \(O(1)\) amortized | Appends an empty row |
//! | `edge_count` | \(O(n^2 / 64)\) | Scans every row |

use serde::{Deserialize, Serialize};

use crate::collections::bit_set::{self, BitSet};
use crate::error::{GraphError, Result};

/// Upper bound on vertices for [`UndirectedGraph`] when no bound is named.
pub const DEFAULT_MAX_VERTICES: usize = 4096;

/// Vertex cap of the classic fixed-size demos.
pub const CLASSIC_MAX_VERTICES: usize = 20;

/// Graph bounded by [`DEFAULT_MAX_VERTICES`].
pub type Graph = UndirectedGraph<DEFAULT_MAX_VERTICES>;

/// Graph sized like the classic 20-vertex adjacency-matrix programs.
pub type ClassicGraph = UndirectedGraph<CLASSIC_MAX_VERTICES>;

/// An undirected graph over the vertices `0..vertex_count()`.
///
/// `MAX` bounds the number of vertices the graph may ever hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndirectedGraph<const MAX: usize = DEFAULT_MAX_VERTICES> {
    rows: Vec<BitSet>,
}

impl<const MAX: usize> UndirectedGraph<MAX> {
    /// Largest vertex count accepted by this graph type.
    pub const MAX_VERTICES: usize = MAX;

    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `vertex_count` is zero or above `MAX`.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 || vertex_count > MAX {
            return Err(GraphError::InvalidSize {
                requested: vertex_count,
                max: MAX,
            });
        }

        let rows = (0..vertex_count)
            .map(|_| BitSet::with_capacity(vertex_count))
            .collect();

        graph_debug!(vertex_count, "created graph");
        Ok(Self { rows })
    }

    /// Creates a graph and inserts every edge in `edges`.
    ///
    /// # Errors
    /// Fails on the first invalid size or vertex, as [`new`](Self::new) and
    /// [`add_edge`](Self::add_edge) would.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Appends an isolated vertex and returns its index.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if the graph is already at `MAX`.
    pub fn add_vertex(&mut self) -> Result<usize> {
        let idx = self.rows.len();
        if idx >= MAX {
            return Err(GraphError::InvalidSize {
                requested: idx + 1,
                max: MAX,
            });
        }
        self.rows.push(BitSet::new());
        Ok(idx)
    }

    /// Adds the undirected edge `{u, v}`. Adding an existing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let inserted = self.rows[u].insert(v);
        self.rows[v].insert(u);

        if inserted {
            graph_trace!(u, v, "edge added");
        }
        Ok(())
    }

    /// Returns `true` if the edge `{u, v}` exists.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.rows[u].contains(v))
    }

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(Neighbors {
            inner: self.rows[vertex].iter(),
        })
    }

    /// Returns the number of neighbors of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.rows[vertex].len())
    }

    /// Returns the number of undirected edges, counting entries above the diagonal.
    pub fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().filter(|&j| j > i).count())
            .sum()
    }

    /// Iterates every edge once as `(u, v)` with `u <= v`, ascending by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(u, row)| row.iter().filter(move |&v| v >= u).map(move |v| (u, v)))
    }

    /// Fails with [`GraphError::InvalidVertex`] unless `vertex < vertex_count()`.
    #[inline]
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.rows.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.rows.len(),
            })
        }
    }

    /// Adjacency rows, indexed by vertex.
    #[inline]
    pub(crate) fn rows(&self) -> &[BitSet] {
        &self.rows
    }
}

/// Ascending iterator over a vertex's neighbors.
pub struct Neighbors<'a> {
    inner: bit_set::Iter<'a>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next()
    }
}

/// Serializable description of a graph: a vertex count and an edge list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Number of vertices.
    pub vertices: usize,
    /// Undirected edges as index pairs.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

impl<const MAX: usize> TryFrom<GraphDescription> for UndirectedGraph<MAX> {
    type Error = GraphError;

    fn try_from(desc: GraphDescription) -> Result<Self> {
        Self::from_edges(desc.vertices, desc.edges)
    }
}

impl<const MAX: usize> From<&UndirectedGraph<MAX>> for GraphDescription {
    fn from(graph: &UndirectedGraph<MAX>) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}
