#![allow(dead_code)]

use std::collections::BTreeMap;

use matrix_graph::{GraphError, MatrixGraph, adjacency_matrix::AdjacencyMatrix};
use quickcheck::{Arbitrary, Gen};

/// Vertex values are drawn from a small range so that operations often hit
/// existing vertices.
const VERTEX_RANGE: u8 = 12;

fn arb_vertex(g: &mut Gen) -> u8 {
    u8::arbitrary(g) % VERTEX_RANGE
}

fn arb_weight(g: &mut Gen) -> u8 {
    u8::arbitrary(g) % 9 + 1
}

/// A single mutation of a graph.  Weights are ignored by unweighted graphs.
#[derive(Clone, Debug)]
pub enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, u8),
    RemoveEdge(u8, u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 10 {
            0..=2 => Op::AddVertex(arb_vertex(g)),
            3 => Op::RemoveVertex(arb_vertex(g)),
            4..=7 => Op::AddEdge(arb_vertex(g), arb_vertex(g), arb_weight(g)),
            _ => Op::RemoveEdge(arb_vertex(g), arb_vertex(g)),
        }
    }
}

/// A straightforward model of an undirected simple graph keyed by vertex
/// value, used as the reference for property tests.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub vertices: Vec<u8>,
    pub edges: BTreeMap<(u8, u8), u8>,
}

fn key(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}

impl Model {
    fn check_pair(&self, a: u8, b: u8) -> Result<(u8, u8), GraphError> {
        if self.vertices.contains(&a) && self.vertices.contains(&b) {
            Ok(key(a, b))
        } else {
            Err(GraphError::InvalidVertex)
        }
    }

    /// Applies `op`, returning the outcome the graph is expected to report.
    /// Returns `None` for operations the model skips.
    pub fn apply(&mut self, op: &Op) -> Option<Result<(), GraphError>> {
        match *op {
            Op::AddVertex(v) => {
                if self.vertices.contains(&v) {
                    return None;
                }
                self.vertices.push(v);
                Some(Ok(()))
            }
            Op::RemoveVertex(v) => {
                if self.vertices.is_empty() {
                    return Some(Err(GraphError::EmptyCollection));
                }
                let Some(pos) = self.vertices.iter().position(|&x| x == v) else {
                    return Some(Err(GraphError::InvalidVertex));
                };
                self.vertices.remove(pos);
                self.edges.retain(|&(a, b), _| a != v && b != v);
                Some(Ok(()))
            }
            Op::AddEdge(a, b, w) => Some(self.check_pair(a, b).map(|k| {
                self.edges.entry(k).or_insert(w);
            })),
            Op::RemoveEdge(a, b) => {
                if self.vertices.is_empty() {
                    return Some(Err(GraphError::EmptyCollection));
                }
                let k = match self.check_pair(a, b) {
                    Ok(k) => k,
                    Err(e) => return Some(Err(e)),
                };
                Some(self.edges.remove(&k).map(|_| ()).ok_or(GraphError::InvalidEdge))
            }
        }
    }

    /// Computes all-pairs least path costs by Floyd-Warshall, indexed by
    /// position in `vertices`.  `unit` makes every edge cost one.
    pub fn all_pairs_costs(&self, unit: bool) -> Vec<Vec<f64>> {
        let n = self.vertices.len();
        let mut cost = vec![vec![f64::INFINITY; n]; n];
        for i in 0..n {
            cost[i][i] = 0.0;
        }
        let index = |v: u8| self.vertices.iter().position(|&x| x == v);
        for (&(a, b), &w) in &self.edges {
            if let (Some(i), Some(j)) = (index(a), index(b)) {
                if i != j {
                    let w = if unit { 1.0 } else { f64::from(w) };
                    cost[i][j] = cost[i][j].min(w);
                    cost[j][i] = cost[j][i].min(w);
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = cost[i][k] + cost[k][j];
                    if through < cost[i][j] {
                        cost[i][j] = through;
                    }
                }
            }
        }
        cost
    }
}

/// Collects the edges of `graph` as sorted vertex pairs.
pub fn edge_keys<M: AdjacencyMatrix>(graph: &MatrixGraph<u8, M>) -> Vec<(u8, u8)> {
    let mut keys: Vec<_> = graph.edges().map(|(a, b, _)| key(*a, *b)).collect();
    keys.sort_unstable();
    keys
}

/// Returns true if `graph` matches `model` in vertex order and edge set, and
/// its edge queries agree in both directions.
pub fn matches_model<M: AdjacencyMatrix>(graph: &MatrixGraph<u8, M>, model: &Model) -> bool {
    let vertices: Vec<u8> = graph.vertices().copied().collect();
    let model_edges: Vec<(u8, u8)> = model.edges.keys().copied().collect();
    let symmetric = model.vertices.iter().all(|a| {
        model
            .vertices
            .iter()
            .all(|b| graph.has_edge(a, b) == graph.has_edge(b, a))
    });
    vertices == model.vertices
        && edge_keys(graph) == model_edges
        && symmetric
        && (graph.is_empty() || graph.is_connected())
        && model
            .vertices
            .iter()
            .enumerate()
            .all(|(i, v)| graph.find_index(v) == Some(i))
}
