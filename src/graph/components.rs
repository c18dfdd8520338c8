//! Connected components ("clusters") by repeated depth-first search.
//!
//! Vertices are scanned in ascending order; each one not yet reached seeds a
//! fresh [`Dfs`] whose output becomes the next component. The visitation set is
//! handed from one traversal to the next by value.

use serde::Serialize;

use crate::collections::bit_set::BitSet;
use crate::graph::adjacency_matrix::UndirectedGraph;
use crate::graph::traversal::Dfs;

/// The connected components of a graph, in discovery order.
///
/// Component `i` lists its vertices in DFS preorder from its seed, which is the
/// smallest vertex of the component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Components {
    clusters: Vec<Vec<usize>>,
    #[serde(skip)]
    membership: Vec<usize>,
}

impl Components {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if there are no components (never the case for a built graph).
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns component `index`.
    pub fn get(&self, index: usize) -> Option<&[usize]> {
        self.clusters.get(index).map(Vec::as_slice)
    }

    /// Iterates the components in discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.clusters.iter().map(Vec::as_slice)
    }

    /// Size of each component, in discovery order.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }

    /// Index of the component containing `vertex`.
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.membership.get(vertex).copied()
    }

    /// Returns `true` if `u` and `v` lie in the same component.
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        matches!(
            (self.component_of(u), self.component_of(v)),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Summary statistics over the component sizes.
    pub fn stats(&self) -> ComponentStats {
        ComponentStats::from(self)
    }

    /// Returns the components as plain vectors.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.clusters
    }
}

/// Location and size of one component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    /// Zero-based discovery index.
    pub index: usize,
    /// Number of vertices.
    pub size: usize,
}

/// Size statistics over a set of components.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentStats {
    /// Number of components.
    pub count: usize,
    /// Size of each component, in discovery order.
    pub sizes: Vec<usize>,
    /// The largest component; the earliest one wins ties.
    pub largest: Option<ComponentSummary>,
    /// The smallest component; the earliest one wins ties.
    pub smallest: Option<ComponentSummary>,
    /// Mean component size, `0.0` when there are no components.
    pub average_size: f64,
    /// Components made of a single vertex.
    pub isolated: usize,
}

impl From<&Components> for ComponentStats {
    fn from(components: &Components) -> Self {
        let sizes = components.sizes();

        let mut largest: Option<ComponentSummary> = None;
        let mut smallest: Option<ComponentSummary> = None;
        for (index, &size) in sizes.iter().enumerate() {
            let here = ComponentSummary { index, size };
            if largest.map_or(true, |l| size > l.size) {
                largest = Some(here);
            }
            if smallest.map_or(true, |s| size < s.size) {
                smallest = Some(here);
            }
        }

        let total: usize = sizes.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let average_size = if sizes.is_empty() {
            0.0
        } else {
            total as f64 / sizes.len() as f64
        };

        Self {
            count: sizes.len(),
            isolated: sizes.iter().filter(|&&s| s == 1).count(),
            sizes,
            largest,
            smallest,
            average_size,
        }
    }
}

/// Partitions the graph into connected components.
pub fn connected_components<const MAX: usize>(graph: &UndirectedGraph<MAX>) -> Components {
    let n = graph.vertex_count();
    let mut visited = BitSet::with_capacity(n);
    let mut clusters = Vec::new();
    let mut membership = vec![0; n];

    for seed in 0..n {
        if visited.contains(seed) {
            continue;
        }

        let mut dfs = Dfs::seeded(graph.rows(), seed, visited);
        let cluster: Vec<usize> = dfs.by_ref().collect();
        visited = dfs.into_visited();

        for &v in &cluster {
            membership[v] = clusters.len();
        }
        graph_trace!(seed, size = cluster.len(), "component discovered");
        clusters.push(cluster);
    }

    graph_debug!(vertices = n, components = clusters.len(), "components computed");
    Components {
        clusters,
        membership,
    }
}

/// Returns `true` iff the graph has exactly one component.
pub fn is_connected<const MAX: usize>(graph: &UndirectedGraph<MAX>) -> bool {
    connected_components(graph).len() == 1
}

impl<const MAX: usize> UndirectedGraph<MAX> {
    /// See [`connected_components`].
    pub fn components(&self) -> Components {
        connected_components(self)
    }

    /// See [`is_connected`].
    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency_matrix::ClassicGraph;

    #[test]
    fn test_simple_disconnected() {
        let g = ClassicGraph::from_edges(7, [(0, 1), (1, 2), (3, 4)]).unwrap();
        let comps = g.components();

        assert_eq!(comps.len(), 4);
        assert_eq!(
            comps.clone().into_inner(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6]]
        );
        assert!(!g.is_connected());
        assert_eq!(comps.component_of(4), Some(1));
        assert_eq!(comps.component_of(7), None);
        assert!(comps.same_component(0, 2));
        assert!(!comps.same_component(2, 3));
    }

    #[test]
    fn test_component_order_is_dfs_preorder() {
        let g = ClassicGraph::from_edges(6, [(0, 4), (4, 1), (0, 2), (3, 5)]).unwrap();
        let comps = g.components();
        assert_eq!(comps.get(0), Some(&[0, 2, 4, 1][..]));
        assert_eq!(comps.get(1), Some(&[3, 5][..]));
        assert_eq!(comps.get(2), None);
    }

    #[test]
    fn test_stats_first_wins_ties() {
        // Sizes: 2, 3, 3, 1, 2, 1
        let g = ClassicGraph::from_edges(
            12,
            [(0, 1), (2, 3), (3, 4), (5, 6), (6, 7), (9, 10)],
        )
        .unwrap();
        let stats = g.components().stats();

        assert_eq!(stats.count, 6);
        assert_eq!(stats.sizes, vec![2, 3, 3, 1, 2, 1]);
        assert_eq!(stats.largest, Some(ComponentSummary { index: 1, size: 3 }));
        assert_eq!(stats.smallest, Some(ComponentSummary { index: 3, size: 1 }));
        assert!((stats.average_size - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.isolated, 2);
    }

    #[test]
    fn test_connected_graph() {
        let g = ClassicGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(g.is_connected());
        let stats = g.components().stats();
        assert_eq!(stats.largest, stats.smallest);
        assert_eq!(stats.isolated, 0);

        let single = ClassicGraph::new(1).unwrap();
        assert!(single.is_connected());
        assert_eq!(single.components().stats().isolated, 1);
    }

    #[test]
    fn test_serialize_components() {
        let g = ClassicGraph::from_edges(3, [(0, 2)]).unwrap();
        let json = serde_json::to_value(g.components()).unwrap();
        assert_eq!(json, serde_json::json!({ "clusters": [[0, 2], [1]] }));
    }
}
