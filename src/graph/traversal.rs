//! Depth-first and breadth-first traversal.
//!
//! [`Dfs`] and [`Bfs`] are lazy iterators yielding vertex indices. Each owns its
//! visitation set, so traversals never share state through the graph and may
//! run side by side over the same `&UndirectedGraph`.

use std::collections::VecDeque;

use crate::collections::bit_set::BitSet;
use crate::error::Result;
use crate::graph::adjacency_matrix::UndirectedGraph;

#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    /// Next neighbor index to consider in `vertex`'s row.
    cursor: usize,
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in the preorder of a recursive DFS that explores neighbors
/// in ascending index order. The explicit stack holds one frame per vertex on
/// the current branch and resumes each row scan where it stopped, so the order
/// matches [`dfs_recursive`] exactly and the stack never outgrows the vertex count.
pub struct Dfs<'g> {
    rows: &'g [BitSet],
    visited: BitSet,
    stack: Vec<Frame>,
    pending: Option<usize>,
}

impl<'g> Dfs<'g> {
    /// Creates a DFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is out of range.
    pub fn new<const MAX: usize>(graph: &'g UndirectedGraph<MAX>, start: usize) -> Result<Self> {
        let visited = BitSet::with_capacity(graph.vertex_count());
        Self::with_visited(graph, start, visited)
    }

    /// Creates a DFS iterator that treats every vertex in `visited` as already seen.
    ///
    /// If `start` itself is in `visited` the iterator is empty. Recover the set,
    /// including everything this traversal reached, with [`into_visited`](Self::into_visited).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is out of range.
    pub fn with_visited<const MAX: usize>(
        graph: &'g UndirectedGraph<MAX>,
        start: usize,
        visited: BitSet,
    ) -> Result<Self> {
        graph.check_vertex(start)?;
        Ok(Self::seeded(graph.rows(), start, visited))
    }

    pub(crate) fn seeded(rows: &'g [BitSet], start: usize, mut visited: BitSet) -> Self {
        let mut stack = Vec::new();
        let mut pending = None;

        if visited.insert(start) {
            stack.push(Frame {
                vertex: start,
                cursor: 0,
            });
            pending = Some(start);
        }

        Self {
            rows,
            visited,
            stack,
            pending,
        }
    }

    /// Consumes the iterator and returns its visitation set.
    pub fn into_visited(self) -> BitSet {
        self.visited
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        let rows = self.rows;
        while let Some(frame) = self.stack.last_mut() {
            let row = &rows[frame.vertex];
            let mut candidate = row.next_from(frame.cursor);
            while let Some(v) = candidate {
                if !self.visited.contains(v) {
                    break;
                }
                candidate = row.next_from(v + 1);
            }

            match candidate {
                Some(v) => {
                    frame.cursor = v + 1;
                    self.visited.insert(v);
                    self.stack.push(Frame { vertex: v, cursor: 0 });
                    return Some(v);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Vertices are marked visited when enqueued, never when dequeued, so each
/// vertex enters the queue at most once. Neighbors are enqueued in ascending order.
pub struct Bfs<'g> {
    rows: &'g [BitSet],
    visited: BitSet,
    queue: VecDeque<usize>,
}

impl<'g> Bfs<'g> {
    /// Creates a BFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is out of range.
    pub fn new<const MAX: usize>(graph: &'g UndirectedGraph<MAX>, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;

        let mut visited = BitSet::with_capacity(graph.vertex_count());
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        Ok(Self {
            rows: graph.rows(),
            visited,
            queue,
        })
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in &self.rows[u] {
            if self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// Recursive depth-first traversal from `start`, returning the preorder.
///
/// Recursion depth grows with the longest DFS branch; prefer [`Dfs`] for large graphs.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if `start` is out of range.
pub fn dfs_recursive<const MAX: usize>(graph: &UndirectedGraph<MAX>, start: usize) -> Result<Vec<usize>> {
    fn visit(rows: &[BitSet], u: usize, visited: &mut BitSet, order: &mut Vec<usize>) {
        visited.insert(u);
        order.push(u);
        for v in &rows[u] {
            if !visited.contains(v) {
                visit(rows, v, visited, order);
            }
        }
    }

    graph.check_vertex(start)?;
    let mut visited = BitSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    visit(graph.rows(), start, &mut visited, &mut order);
    Ok(order)
}

/// Breadth-first traversal from `start`, grouped by hop distance.
///
/// `levels[d]` holds the vertices `d` hops away in the order BFS dequeues them,
/// so flattening the result gives exactly the [`Bfs`] order. Unreachable
/// vertices appear in no level.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if `start` is out of range.
pub fn bfs_levels<const MAX: usize>(graph: &UndirectedGraph<MAX>, start: usize) -> Result<Vec<Vec<usize>>> {
    graph.check_vertex(start)?;

    let rows = graph.rows();
    let mut visited = BitSet::with_capacity(rows.len());
    visited.insert(start);

    let mut levels = Vec::new();
    let mut frontier = vec![start];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &u in &frontier {
            for v in &rows[u] {
                if visited.insert(v) {
                    next.push(v);
                }
            }
        }
        levels.push(frontier);
        frontier = next;
    }

    graph_trace!(start, depth = levels.len(), "bfs levels built");
    Ok(levels)
}

impl<const MAX: usize> UndirectedGraph<MAX> {
    /// Lazily traverses the graph depth-first from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is out of range.
    pub fn dfs(&self, start: usize) -> Result<Dfs<'_>> {
        Dfs::new(self, start)
    }

    /// Lazily traverses the graph breadth-first from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is out of range.
    pub fn bfs(&self, start: usize) -> Result<Bfs<'_>> {
        Bfs::new(self, start)
    }

    /// See [`bfs_levels`].
    ///
    /// # Errors
    /// As [`bfs_levels`].
    pub fn bfs_levels(&self, start: usize) -> Result<Vec<Vec<usize>>> {
        bfs_levels(self, start)
    }
}
