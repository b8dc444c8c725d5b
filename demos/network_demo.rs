//! Example that builds a graph or weighted network, dumps it, and runs the
//! traversals and shortest-path searches over it.
//!
//! Edges are generated deterministically from the vertex indices, so the same
//! arguments always produce the same graph:
//!
//! ```text
//! cargo run --example network_demo -- --vertices 20 --density 3 --weighted
//! ```

use std::fmt::Display;

use clap::Parser;
use matrix_graph::{Graph, MatrixGraph, Network, adjacency_matrix::AdjacencyMatrix};

/// Build a graph on numbered vertices and explore it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short, long, default_value_t = 8)]
    vertices: usize,

    /// Out of ten, how likely a pair of vertices is to share an edge
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=10))]
    density: u8,

    /// Give each edge a weight and search by weight instead of edge count
    #[arg(short, long)]
    weighted: bool,

    /// Vertex to start traversals and searches from
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Vertex to search for (defaults to the last vertex)
    #[arg(long)]
    target: Option<usize>,

    /// Skip the adjacency matrix dump
    #[arg(long)]
    quiet: bool,

    /// Log graph operations to stdout as they happen
    #[arg(long)]
    trace: bool,
}

fn has_edge(i: usize, j: usize, density: u8) -> bool {
    (i * 7 + j * 11) % 10 < usize::from(density)
}

fn weight(i: usize, j: usize) -> f64 {
    ((i + j) % 5 + 1) as f64
}

fn report<M: AdjacencyMatrix>(graph: &MatrixGraph<usize, M>, args: &Args) {
    if !args.quiet {
        println!("{}", graph);
    }
    println!("vertices: {}  capacity: {}", graph.size(), graph.capacity());
    println!("edges: {}", graph.edges().count());
    println!("fully connected: {}", graph.is_fully_connected());
    #[cfg(feature = "pathfinding")]
    println!("components: {:?}", graph.connected_components());

    let bfs: Vec<_> = graph.bfs(&args.start).map(ToString::to_string).collect();
    println!("bfs from {}: {}", args.start, bfs.join(" "));
    let dfs: Vec<_> = graph.dfs(&args.start).map(ToString::to_string).collect();
    println!("dfs from {}: {}", args.start, dfs.join(" "));
}

fn print_path<'a, T: Display + 'a>(label: &str, path: impl IntoIterator<Item = &'a T>) {
    let steps: Vec<_> = path.into_iter().map(ToString::to_string).collect();
    if steps.is_empty() {
        println!("{}: no path", label);
    } else {
        println!("{}: {}", label, steps.join(" -> "));
    }
}

/// Adds the vertices `0..args.vertices` and calls `connect` for every pair that
/// should share an edge.
fn populate<M, F>(graph: &mut MatrixGraph<usize, M>, args: &Args, mut connect: F)
where
    M: AdjacencyMatrix,
    F: FnMut(&mut MatrixGraph<usize, M>, usize, usize),
{
    for i in 0..args.vertices {
        graph.add_vertex(i);
    }
    for i in 0..args.vertices {
        for j in i + 1..args.vertices {
            if has_edge(i, j, args.density) {
                connect(graph, i, j);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.trace {
        matrix_graph::tracing_support::init_tracing();
    }
    let target = args
        .target
        .unwrap_or_else(|| args.vertices.saturating_sub(1));

    if args.weighted {
        let mut network = Network::new();
        let mut result = Ok(());
        populate(&mut network, &args, |network, i, j| {
            if result.is_ok() {
                result = network.add_edge(&i, &j, weight(i, j));
            }
        });
        result?;
        report(&network, &args);
        let path = network.shortest_path(&args.start, &target);
        print_path("least-weight path", &path);
        println!("weight: {}", path.weight());
    } else {
        let mut graph = Graph::new();
        let mut result = Ok(());
        populate(&mut graph, &args, |graph, i, j| {
            if result.is_ok() {
                result = graph.add_edge(&i, &j);
            }
        });
        result?;
        report(&graph, &args);
        let path = graph.shortest_path(&args.start, &target);
        print_path("fewest-edge path", &path);
        println!("edges: {}", path.num_edges());
    }
    Ok(())
}
