//! End-to-end checks of the public graph API.

use graphwalk::graph::scenarios;
use graphwalk::*;

#[test]
fn test_create_and_bounds() {
    assert!(matches!(
        Graph::new(0),
        Err(GraphError::InvalidSize { requested: 0, .. })
    ));
    assert!(ClassicGraph::new(20).is_ok());
    assert_eq!(
        ClassicGraph::new(21).err(),
        Some(GraphError::InvalidSize { requested: 21, max: 20 })
    );

    let mut g = ClassicGraph::new(2).unwrap();
    assert_eq!(
        g.add_edge(0, 2),
        Err(GraphError::InvalidVertex {
            vertex: 2,
            vertex_count: 2
        })
    );
}

#[test]
fn test_edge_insertion_is_idempotent() {
    let mut g = Graph::new(5).unwrap();
    g.add_edge(1, 4).unwrap();
    let once = g.edge_count();
    g.add_edge(1, 4).unwrap();
    g.add_edge(4, 1).unwrap();
    assert_eq!(g.edge_count(), once);
    assert_eq!(g.neighbors(4).unwrap().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_disconnected_clusters() {
    let g = Graph::from_edges(7, [(0, 1), (1, 2), (3, 4)]).unwrap();
    let comps = g.components();
    assert_eq!(
        comps.iter().collect::<Vec<_>>(),
        vec![&[0, 1, 2][..], &[3, 4][..], &[5][..], &[6][..]]
    );
    assert!(!g.is_connected());
    assert!(!is_connected(&g));

    let stats = comps.stats();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.largest, Some(ComponentSummary { index: 0, size: 3 }));
    assert_eq!(stats.smallest, Some(ComponentSummary { index: 2, size: 1 }));
    assert!((stats.average_size - 1.75).abs() < 1e-9);
    assert_eq!(stats.isolated, 2);
}

#[test]
fn test_shortest_path_example() {
    let g = scenarios::SHORTEST_PATH.build().unwrap();
    let bfs = g.shortest_path(0, 7).unwrap();
    assert_eq!(bfs.hops(), 4);
    assert_eq!(bfs.start(), 0);
    assert_eq!(bfs.end(), 7);

    // Every consecutive pair is an edge.
    for pair in bfs.vertices().windows(2) {
        assert_eq!(g.has_edge(pair[0], pair[1]), Ok(true));
    }

    let dfs = g.dfs_path(0, 7).unwrap();
    assert!(bfs.hops() <= dfs.hops());
    assert_eq!(dfs_path_iterative(&g, 0, 7).unwrap(), dfs);
}

#[test]
fn test_single_vertex_results() {
    let g = Graph::new(4).unwrap();
    assert_eq!(g.dfs(2).unwrap().collect::<Vec<_>>(), vec![2]);
    assert_eq!(g.bfs(2).unwrap().collect::<Vec<_>>(), vec![2]);
    assert_eq!(g.shortest_path(1, 1).unwrap().into_vec(), vec![1]);
    assert_eq!(
        g.dfs_path(1, 2),
        Err(GraphError::NoPath { start: 1, end: 2 })
    );
}

#[test]
fn test_traversals_are_independent() {
    let g = scenarios::SOCIAL_NETWORK.build().unwrap();
    let mut a = g.dfs(0).unwrap();
    let mut b = g.dfs(0).unwrap();

    // Interleaving two traversals over one graph does not disturb either.
    let mut left = Vec::new();
    let mut right = Vec::new();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => {
                left.extend(x);
                right.extend(y);
            }
        }
    }
    assert_eq!(left, right);
    assert_eq!(left, vec![0, 1, 2, 3]);
}

#[test]
fn test_grown_graph_joins_components() {
    let mut g = Graph::from_edges(3, [(0, 1)]).unwrap();
    assert_eq!(g.components().len(), 2);

    let v = g.add_vertex().unwrap();
    assert_eq!(v, 3);
    assert_eq!(g.components().len(), 3);

    g.add_edge(1, 3).unwrap();
    g.add_edge(3, 2).unwrap();
    assert!(g.is_connected());
    assert_eq!(g.dfs(0).unwrap().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
    assert_eq!(distances(&g, 0).unwrap(), vec![Some(0), Some(1), Some(3), Some(2)]);
}

#[test]
fn test_network_topology_report() {
    let g = scenarios::NETWORK_TOPOLOGY.build().unwrap();
    let comps = g.components();
    let report = ClusterReport::new(&comps).to_string();

    assert!(report.starts_with("Total clusters found: 5\n"));
    assert!(report.contains("Cluster 1 (size 5): { 0, 1, 2, 3, 4 }\n"));
    assert!(report.contains("Cluster 2 (size 3): { 5, 6, 7 }\n"));
    assert!(report.contains("Average cluster size: 2.40\n"));
    assert!(report.ends_with("Isolated vertices: 2\n"));
}

#[test]
fn test_traversal_and_tree_scenarios() {
    let g = scenarios::TRAVERSAL.build().unwrap();
    let recursive = dfs_recursive(&g, 0).unwrap();
    assert_eq!(recursive, vec![0, 1, 3, 4, 2, 5]);
    assert_eq!(g.dfs(0).unwrap().collect::<Vec<_>>(), recursive);
    assert_eq!(g.bfs(0).unwrap().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

    let tree = scenarios::TREE.build().unwrap();
    let levels = bfs_levels(&tree, 0).unwrap();
    assert_eq!(levels, vec![vec![0], vec![1, 2], vec![3, 4, 5, 6]]);
    for (depth, level) in levels.iter().enumerate() {
        for &v in level {
            assert_eq!(distances(&tree, 0).unwrap()[v], Some(depth));
        }
    }
}
