//! Error type shared by every graph operation.

use core::fmt;

/// Failures reported by graph construction, traversal and path search.
///
/// All variants are recoverable; the caller decides how to present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// Requested vertex count is zero or exceeds the graph's capacity.
    InvalidSize {
        /// The vertex count that was asked for.
        requested: usize,
        /// The largest vertex count this graph type accepts.
        max: usize,
    },
    /// A vertex index outside `[0, vertex_count)`.
    InvalidVertex {
        /// The offending index.
        vertex: usize,
        /// Number of vertices in the graph at the time of the call.
        vertex_count: usize,
    },
    /// No route connects `start` to `end`.
    NoPath {
        /// Where the search began.
        start: usize,
        /// The vertex that could not be reached.
        end: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidSize { requested, max } => {
                write!(f, "invalid vertex count {requested} (expected 1..={max})")
            }
            Self::InvalidVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} out of bounds for graph with {vertex_count} vertices"
            ),
            Self::NoPath { start, end } => write!(f, "no path from {start} to {end}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = GraphError::InvalidSize { requested: 0, max: 20 };
        assert_eq!(e.to_string(), "invalid vertex count 0 (expected 1..=20)");

        let e = GraphError::InvalidVertex {
            vertex: 9,
            vertex_count: 4,
        };
        assert_eq!(
            e.to_string(),
            "vertex 9 out of bounds for graph with 4 vertices"
        );

        let e = GraphError::NoPath { start: 0, end: 3 };
        assert_eq!(e.to_string(), "no path from 0 to 3");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&GraphError::NoPath { start: 1, end: 2 });
    }
}
