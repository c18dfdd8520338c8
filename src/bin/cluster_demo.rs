use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use graphwalk::graph::render::ClusterReport;
use graphwalk::graph::scenarios::{self, Scenario};
use graphwalk::{dfs_recursive, ComponentStats, Components, Graph, GraphDescription, Path};

#[derive(Parser)]
#[command(name = "cluster_demo")]
#[command(about = "Connected-component and path analysis on small undirected graphs", long_about = None)]
struct Cli {
    /// Built-in graph to analyze
    #[arg(long, value_enum, default_value_t = Which::All, conflicts_with = "graph")]
    scenario: Which,

    /// JSON file with `{ "vertices": n, "edges": [[u, v], ...] }`
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Run the path finders between these two vertices
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    path: Option<Vec<usize>>,

    /// Vertex the DFS and BFS traversals start from
    #[arg(long, value_name = "START", default_value_t = 0)]
    from: usize,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Which {
    Simple,
    Social,
    Network,
    Paths,
    Traversal,
    Tree,
    All,
}

#[derive(Serialize)]
struct PathReport {
    start: usize,
    end: usize,
    dfs: Option<Path>,
    shortest: Option<Path>,
}

#[derive(Serialize)]
struct TraversalReport {
    start: usize,
    dfs_recursive: Vec<usize>,
    dfs_iterative: Vec<usize>,
    bfs: Vec<usize>,
    levels: Vec<Vec<usize>>,
}

#[derive(Serialize)]
struct Report {
    title: String,
    vertices: usize,
    edges: usize,
    connected: bool,
    #[serde(flatten)]
    components: Components,
    stats: ComponentStats,
    traversal: TraversalReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    routes: Vec<PathReport>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let requested: Vec<(usize, usize)> = match cli.path.as_deref() {
        Some(&[start, end]) => vec![(start, end)],
        _ => Vec::new(),
    };

    let mut inputs = Vec::new();
    if let Some(file) = &cli.graph {
        let content = fs::read_to_string(file)
            .with_context(|| format!("reading graph file {}", file.display()))?;
        let desc: GraphDescription = serde_json::from_str(&content)
            .with_context(|| format!("parsing graph file {}", file.display()))?;
        inputs.push((file.display().to_string(), desc, requested));
    } else {
        for scenario in selected(cli.scenario) {
            inputs.push((
                scenario.title.to_string(),
                scenario.description(),
                if requested.is_empty() {
                    scenario.routes.to_vec()
                } else {
                    requested.clone()
                },
            ));
        }
    }

    let mut analyzed = Vec::with_capacity(inputs.len());
    for (title, desc, routes) in inputs {
        let graph = Graph::try_from(desc).with_context(|| format!("building graph \"{title}\""))?;
        let report = analyze(title, &graph, cli.from, &routes)?;
        analyzed.push((report, graph));
    }

    if cli.json {
        let reports: Vec<&Report> = analyzed.iter().map(|(report, _)| report).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (report, graph) in &analyzed {
            print_report(report, graph);
        }
    }

    Ok(())
}

fn selected(which: Which) -> Vec<Scenario> {
    match which {
        Which::Simple => vec![scenarios::SIMPLE_DISCONNECTED],
        Which::Social => vec![scenarios::SOCIAL_NETWORK],
        Which::Network => vec![scenarios::NETWORK_TOPOLOGY],
        Which::Paths => vec![scenarios::SHORTEST_PATH],
        Which::Traversal => vec![scenarios::TRAVERSAL],
        Which::Tree => vec![scenarios::TREE],
        Which::All => scenarios::ALL.to_vec(),
    }
}

fn analyze(title: String, graph: &Graph, from: usize, routes: &[(usize, usize)]) -> Result<Report> {
    let components = graph.components();
    let stats = components.stats();

    let traversal = TraversalReport {
        start: from,
        dfs_recursive: dfs_recursive(graph, from)
            .with_context(|| format!("traversal start {from}"))?,
        dfs_iterative: graph.dfs(from)?.collect(),
        bfs: graph.bfs(from)?.collect(),
        levels: graph.bfs_levels(from)?,
    };

    let mut found = Vec::with_capacity(routes.len());
    for &(start, end) in routes {
        graph
            .check_vertex(start)
            .and_then(|()| graph.check_vertex(end))
            .with_context(|| format!("path endpoints {start} -> {end}"))?;
        found.push(PathReport {
            start,
            end,
            dfs: graph.dfs_path(start, end).ok(),
            shortest: graph.shortest_path(start, end).ok(),
        });
    }

    Ok(Report {
        title,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        connected: components.len() == 1,
        components,
        stats,
        traversal,
        routes: found,
    })
}

fn print_report(report: &Report, graph: &Graph) {
    println!("=== {} ===", report.title);
    println!("{} vertices, {} edges", report.vertices, report.edges);
    println!();
    println!("Adjacency Matrix:");
    print!("{}", graph.matrix_view());
    println!();
    print!("{}", graph.adjacency_listing());
    println!();
    print!("{}", ClusterReport::new(&report.components));
    println!(
        "Is graph connected? {}",
        if report.connected { "YES" } else { "NO" }
    );

    let t = &report.traversal;
    println!();
    println!("--- Traversals from vertex {} ---", t.start);
    println!("DFS (recursive): {}", join(&t.dfs_recursive));
    println!("DFS (iterative): {}", join(&t.dfs_iterative));
    println!("BFS:             {}", join(&t.bfs));
    println!("Level-wise BFS:");
    for (depth, level) in t.levels.iter().enumerate() {
        println!("  Level {depth}: {}", join(level));
    }

    if !report.routes.is_empty() {
        println!();
        let show = |p: &Option<Path>| match p {
            Some(p) => format!("{p} ({} hops)", p.hops()),
            None => "no path".to_string(),
        };
        for route in &report.routes {
            println!("DFS path {} -> {}: {}", route.start, route.end, show(&route.dfs));
            println!("Shortest path {} -> {}: {}", route.start, route.end, show(&route.shortest));
        }
    }
    println!();
}

fn join(vertices: &[usize]) -> String {
    vertices.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
