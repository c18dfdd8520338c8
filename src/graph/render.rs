//! Plain-text views of graphs and their components.
//!
//! Each view borrows what it shows and implements [`Display`](fmt::Display).

use core::fmt;

use crate::graph::adjacency_matrix::UndirectedGraph;
use crate::graph::components::Components;

/// Adjacency matrix as a right-aligned grid of `0`/`1` with index headers.
pub struct MatrixView<'g, const MAX: usize> {
    graph: &'g UndirectedGraph<MAX>,
}

impl<const MAX: usize> fmt::Display for MatrixView<'_, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.graph.rows();

        f.write_str("   ")?;
        for j in 0..rows.len() {
            write!(f, "{j:3}")?;
        }
        writeln!(f)?;

        for (i, row) in rows.iter().enumerate() {
            write!(f, "{i:3}")?;
            for j in 0..rows.len() {
                write!(f, "{:3}", u8::from(row.contains(j)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One line per vertex listing its neighbors, or `(isolated)`.
pub struct AdjacencyListing<'g, const MAX: usize> {
    graph: &'g UndirectedGraph<MAX>,
}

impl<const MAX: usize> fmt::Display for AdjacencyListing<'_, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.graph.rows().iter().enumerate() {
            write!(f, "Vertex {i}: ")?;
            if row.is_empty() {
                f.write_str("(isolated)")?;
            } else {
                write_joined(f, row.iter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Cluster listing followed by size statistics.
pub struct ClusterReport<'c> {
    components: &'c Components,
}

impl<'c> ClusterReport<'c> {
    /// Creates a report over `components`.
    pub fn new(components: &'c Components) -> Self {
        Self { components }
    }
}

impl fmt::Display for ClusterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total clusters found: {}", self.components.len())?;
        writeln!(f)?;

        for (i, cluster) in self.components.iter().enumerate() {
            write!(f, "Cluster {} (size {}): {{ ", i + 1, cluster.len())?;
            write_joined(f, cluster.iter().copied())?;
            writeln!(f, " }}")?;
        }

        let stats = self.components.stats();
        writeln!(f)?;
        if let Some(largest) = stats.largest {
            writeln!(
                f,
                "Largest cluster: Cluster {} with {} vertices",
                largest.index + 1,
                largest.size
            )?;
        }
        if let Some(smallest) = stats.smallest {
            writeln!(
                f,
                "Smallest cluster: Cluster {} with {} vertices",
                smallest.index + 1,
                smallest.size
            )?;
        }
        writeln!(f, "Average cluster size: {:.2}", stats.average_size)?;
        writeln!(f, "Isolated vertices: {}", stats.isolated)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = usize>) -> fmt::Result {
    for (n, item) in items.enumerate() {
        if n > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl<const MAX: usize> UndirectedGraph<MAX> {
    /// Displays the adjacency matrix.
    pub fn matrix_view(&self) -> MatrixView<'_, MAX> {
        MatrixView { graph: self }
    }

    /// Displays each vertex with its neighbors.
    pub fn adjacency_listing(&self) -> AdjacencyListing<'_, MAX> {
        AdjacencyListing { graph: self }
    }
}
