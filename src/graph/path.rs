//! Path search between two vertices.
//!
//! - [`dfs_path`] / [`dfs_path_iterative`]: backtracking depth-first search
//!   returning the first path found when neighbors are tried in ascending order.
//!   Not necessarily shortest.
//! - [`shortest_path`]: BFS with parent pointers; minimal in edge count.
//!
//! Every search owns its bookkeeping, so concurrent searches over one graph
//! cannot observe each other.

use core::fmt;
use std::collections::VecDeque;

use serde::Serialize;

use crate::collections::bit_set::BitSet;
use crate::error::{GraphError, Result};
use crate::graph::adjacency_matrix::UndirectedGraph;

/// A walk through the graph from [`start`](Path::start) to [`end`](Path::end).
///
/// Never empty: a path from a vertex to itself holds that single vertex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices }
    }

    /// The vertices along the path, `start` first.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// First vertex.
    pub fn start(&self) -> usize {
        self.vertices[0]
    }

    /// Last vertex.
    pub fn end(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed; `0` for a single-vertex path.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns the vertex sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.vertices
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.vertices
    }
}

/// Returns `true` if `to` can be reached from `from` without entering `blocked`.
fn reaches_avoiding(rows: &[BitSet], from: usize, to: usize, blocked: &BitSet) -> bool {
    if from == to {
        return true;
    }

    let mut seen = BitSet::with_capacity(rows.len());
    let mut stack = vec![from];
    seen.insert(from);

    while let Some(u) = stack.pop() {
        for v in &rows[u] {
            if v == to {
                return true;
            }
            if !blocked.contains(v) && seen.insert(v) {
                stack.push(v);
            }
        }
    }
    false
}

/// Backtracking depth-first search for a path from `start` to `end`.
///
/// Vertices join the active path on entry and leave it again when every branch
/// through them is exhausted, so a vertex may later be reached by another route.
/// Branches from which `end` is unreachable (given the active path) are skipped
/// before being entered; this prunes work without changing which path is found.
///
/// # Errors
/// [`GraphError::InvalidVertex`] for an out-of-range endpoint,
/// [`GraphError::NoPath`] when `end` is unreachable.
pub fn dfs_path<const MAX: usize>(graph: &UndirectedGraph<MAX>, start: usize, end: usize) -> Result<Path> {
    fn search(
        rows: &[BitSet],
        u: usize,
        end: usize,
        on_path: &mut BitSet,
        path: &mut Vec<usize>,
    ) -> bool {
        on_path.insert(u);
        path.push(u);
        if u == end {
            return true;
        }

        for v in &rows[u] {
            if on_path.contains(v) || !reaches_avoiding(rows, v, end, on_path) {
                continue;
            }
            if search(rows, v, end, on_path, path) {
                return true;
            }
        }

        on_path.remove(u);
        path.pop();
        false
    }

    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    let rows = graph.rows();
    let mut on_path = BitSet::with_capacity(rows.len());
    let mut path = Vec::new();

    if search(rows, start, end, &mut on_path, &mut path) {
        graph_debug!(start, end, hops = path.len() - 1, "dfs path found");
        Ok(Path::new(path))
    } else {
        graph_debug!(start, end, "dfs path search exhausted");
        Err(GraphError::NoPath { start, end })
    }
}

/// Explicit-stack form of [`dfs_path`]; returns the identical path.
///
/// # Errors
/// [`GraphError::InvalidVertex`] for an out-of-range endpoint,
/// [`GraphError::NoPath`] when `end` is unreachable.
pub fn dfs_path_iterative<const MAX: usize>(
    graph: &UndirectedGraph<MAX>,
    start: usize,
    end: usize,
) -> Result<Path> {
    struct Frame {
        vertex: usize,
        cursor: usize,
    }

    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    let rows = graph.rows();
    let mut on_path = BitSet::with_capacity(rows.len());
    let mut stack = vec![Frame {
        vertex: start,
        cursor: 0,
    }];
    on_path.insert(start);

    while let Some(frame) = stack.last_mut() {
        let u = frame.vertex;
        if u == end {
            let vertices = stack.iter().map(|f| f.vertex).collect();
            return Ok(Path::new(vertices));
        }

        let row = &rows[u];
        let mut candidate = row.next_from(frame.cursor);
        while let Some(v) = candidate {
            if !on_path.contains(v) && reaches_avoiding(rows, v, end, &on_path) {
                break;
            }
            candidate = row.next_from(v + 1);
        }

        match candidate {
            Some(v) => {
                frame.cursor = v + 1;
                on_path.insert(v);
                stack.push(Frame { vertex: v, cursor: 0 });
            }
            None => {
                on_path.remove(u);
                stack.pop();
            }
        }
    }

    Err(GraphError::NoPath { start, end })
}

/// Shortest path (fewest edges) from `start` to `end` by breadth-first search.
///
/// The search stops as soon as `end` is dequeued; the path is rebuilt by
/// following parent pointers back to `start`.
///
/// # Errors
/// [`GraphError::InvalidVertex`] for an out-of-range endpoint,
/// [`GraphError::NoPath`] when `end` is unreachable.
pub fn shortest_path<const MAX: usize>(
    graph: &UndirectedGraph<MAX>,
    start: usize,
    end: usize,
) -> Result<Path> {
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    let rows = graph.rows();
    let n = rows.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = BitSet::with_capacity(n);
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    let mut found = false;
    while let Some(u) = queue.pop_front() {
        if u == end {
            found = true;
            break;
        }
        for v in &rows[u] {
            if visited.insert(v) {
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    if !found {
        graph_debug!(start, end, "bfs exhausted without reaching end");
        return Err(GraphError::NoPath { start, end });
    }

    let mut vertices = vec![end];
    let mut current = end;
    while let Some(p) = parent[current] {
        vertices.push(p);
        current = p;
    }
    vertices.reverse();

    graph_debug!(start, end, hops = vertices.len() - 1, "shortest path found");
    Ok(Path::new(vertices))
}

/// Hop distance from `start` to every vertex; `None` where unreachable.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `start` is out of range.
pub fn distances<const MAX: usize>(graph: &UndirectedGraph<MAX>, start: usize) -> Result<Vec<Option<usize>>> {
    graph.check_vertex(start)?;

    let rows = graph.rows();
    let mut dist = vec![None; rows.len()];
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back((start, 0usize));

    while let Some((u, d)) = queue.pop_front() {
        for v in &rows[u] {
            if dist[v].is_none() {
                dist[v] = Some(d + 1);
                queue.push_back((v, d + 1));
            }
        }
    }
    Ok(dist)
}

impl<const MAX: usize> UndirectedGraph<MAX> {
    /// See [`shortest_path`].
    ///
    /// # Errors
    /// As [`shortest_path`].
    pub fn shortest_path(&self, start: usize, end: usize) -> Result<Path> {
        shortest_path(self, start, end)
    }

    /// See [`dfs_path`].
    ///
    /// # Errors
    /// As [`dfs_path`].
    pub fn dfs_path(&self, start: usize, end: usize) -> Result<Path> {
        dfs_path(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency_matrix::ClassicGraph;

    fn ladder() -> ClassicGraph {
        ClassicGraph::from_edges(
            8,
            [
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
        )
        .unwrap()
    }

    #[test]
    fn test_shortest_path_is_minimal() {
        let g = ladder();
        let path = shortest_path(&g, 0, 7).unwrap();
        assert_eq!(path.hops(), 4);
        assert_eq!(path.start(), 0);
        assert_eq!(path.end(), 7);
        // Ascending neighbor order makes 1 the parent of 3 before 2 can claim it.
        assert_eq!(path.vertices(), &[0, 1, 3, 5, 7]);
    }

    #[test]
    fn test_dfs_path_first_found() {
        let g = ladder();
        let path = dfs_path(&g, 0, 7).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 3, 2, 4, 5, 7]);
        assert_eq!(dfs_path_iterative(&g, 0, 7).unwrap(), path);
        assert!(shortest_path(&g, 0, 7).unwrap().hops() <= path.hops());
    }

    #[test]
    fn test_dead_end_branch_is_abandoned() {
        // 0 - 1 - 2 leads nowhere; the target hangs off 3.
        let g = ClassicGraph::from_edges(5, [(0, 1), (1, 2), (0, 3), (3, 4)]).unwrap();
        let path = dfs_path(&g, 0, 4).unwrap();
        assert_eq!(path.vertices(), &[0, 3, 4]);
        assert_eq!(dfs_path_iterative(&g, 0, 4).unwrap(), path);
    }

    #[test]
    fn test_cycles_do_not_loop() {
        let g = ClassicGraph::from_edges(6, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 1), (3, 5)]).unwrap();
        let path = dfs_path(&g, 0, 5).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2, 3, 5]);
        assert_eq!(dfs_path_iterative(&g, 0, 5).unwrap(), path);
        assert_eq!(shortest_path(&g, 0, 5).unwrap().hops(), 3);
        assert_eq!(dfs_path(&g, 0, 4), Err(GraphError::NoPath { start: 0, end: 4 }));
    }

    #[test]
    fn test_same_start_and_end() {
        let g = ladder();
        for search in [shortest_path::<20>, dfs_path::<20>, dfs_path_iterative::<20>] {
            let path = search(&g, 3, 3).unwrap();
            assert_eq!(path.vertices(), &[3]);
            assert_eq!(path.hops(), 0);
        }
    }

    #[test]
    fn test_no_path() {
        let g = ClassicGraph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        let err = GraphError::NoPath { start: 0, end: 3 };
        assert_eq!(shortest_path(&g, 0, 3), Err(err));
        assert_eq!(dfs_path(&g, 0, 3), Err(err));
        assert_eq!(dfs_path_iterative(&g, 0, 3), Err(err));
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = ladder();
        assert!(matches!(
            shortest_path(&g, 0, 8),
            Err(GraphError::InvalidVertex { vertex: 8, .. })
        ));
        assert!(matches!(
            dfs_path(&g, 9, 0),
            Err(GraphError::InvalidVertex { vertex: 9, .. })
        ));
        assert!(distances(&g, 8).is_err());
    }

    #[test]
    fn test_distances() {
        let g = ClassicGraph::from_edges(5, [(0, 1), (1, 2), (0, 3)]).unwrap();
        assert_eq!(
            distances(&g, 0).unwrap(),
            vec![Some(0), Some(1), Some(2), Some(1), None]
        );
    }

    #[test]
    fn test_display_and_serialize() {
        let path = shortest_path(&ladder(), 0, 5).unwrap();
        assert_eq!(path.to_string(), "0 -> 1 -> 3 -> 5");
        assert_eq!(serde_json::to_string(&path).unwrap(), "[0,1,3,5]");
        assert_eq!(Vec::from(path), vec![0, 1, 3, 5]);
    }
}
