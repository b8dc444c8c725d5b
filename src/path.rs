use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
    fmt::Debug,
};

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{
    Graph, MatrixGraph, Network,
    adjacency_matrix::{AdjacencyMatrix, NO_EDGE},
    tracing_support::{debug, debug_span},
};

/// A shortest path through a graph, from its first vertex to its last.
///
/// An empty path means no path was found: an endpoint was missing, the
/// endpoints were the same vertex, or the target is unreachable.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = "T: Debug"),
    PartialEq(bound = "T: PartialEq")
)]
pub struct Path<'g, T> {
    vertices: Vec<&'g T>,
    weight: f64,
}

impl<'g, T> Path<'g, T> {
    /// Creates an empty path.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            weight: NO_EDGE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices along the path, starting with the start vertex.
    pub fn vertices(&self) -> &[&'g T] {
        &self.vertices
    }

    pub fn first(&self) -> Option<&'g T> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<&'g T> {
        self.vertices.last().copied()
    }

    /// Returns the number of edges along the path; zero for an empty path.
    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns the sum of the edge weights along the path, or infinity for
    /// an empty path.  For an unweighted graph every edge weighs one.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn iter(&self) -> impl Iterator<Item = &'g T> + '_ {
        self.vertices.iter().copied()
    }
}

impl<'g, T> IntoIterator for Path<'g, T> {
    type Item = &'g T;
    type IntoIter = std::vec::IntoIter<&'g T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, 'g, T> IntoIterator for &'a Path<'g, T> {
    type Item = &'g T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'g T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}

/// Reconstructs the index sequence from `start` to `target` by walking the
/// predecessor links back from `target`.
fn walk_predecessors(predecessor: &[Option<usize>], start: usize, target: usize) -> Vec<usize> {
    let mut stack = vec![target];
    let mut index = target;
    while index != start {
        match predecessor[index] {
            Some(previous) => {
                stack.push(previous);
                index = previous;
            }
            None => return Vec::new(),
        }
    }
    stack.into_iter().rev().collect()
}

impl<T, M> MatrixGraph<T, M>
where
    M: AdjacencyMatrix,
{
    /// Turns a sequence of indices into a path, summing the weights of the
    /// edges between consecutive vertices as stored in the matrix.
    fn path_from_indices(&self, indices: Vec<usize>) -> Path<'_, T> {
        if indices.is_empty() {
            return Path::empty();
        }
        let weight: f64 = indices
            .windows(2)
            .map(|pair| self.edge_cost(pair[0], pair[1]).unwrap_or(NO_EDGE))
            .sum();
        let vertices = indices
            .into_iter()
            .filter_map(|index| self.vertex(index))
            .collect();
        Path { vertices, weight }
    }

    /// Finds the path from `start` to `target` with the fewest edges, as a
    /// sequence of indices.  Returns an empty sequence if `start == target`
    /// or `target` is unreachable.
    pub(crate) fn hop_path_indices(&self, start: usize, target: usize) -> Vec<usize> {
        let _span = debug_span!("hop_path", start, target).entered();
        if !self.index_valid(start) || !self.index_valid(target) || start == target {
            return Vec::new();
        }
        let n = self.size();
        let mut visited: BitVec = BitVec::repeat(false, n);
        let mut predecessor = vec![None; n];
        let mut queue = VecDeque::from([start]);
        visited.set(start, true);

        while let Some(index) = queue.pop_front() {
            if index == target {
                return walk_predecessors(&predecessor, start, target);
            }
            for neighbor in self.neighbor_indices(index) {
                if !visited[neighbor] {
                    visited.set(neighbor, true);
                    predecessor[neighbor] = Some(index);
                    queue.push_back(neighbor);
                }
            }
        }
        debug!("target unreachable");
        Vec::new()
    }

    /// Finds the path from `start` to `target` with the least total edge
    /// cost, as a sequence of indices.  Returns an empty sequence if `start ==
    /// target` or `target` is unreachable.
    ///
    /// When several unvisited vertices share the smallest tentative weight,
    /// the one with the lowest index is settled first.
    pub(crate) fn weighted_path_indices(&self, start: usize, target: usize) -> Vec<usize> {
        let _span = debug_span!("weighted_path", start, target).entered();
        if !self.index_valid(start) || !self.index_valid(target) || start == target {
            return Vec::new();
        }
        let n = self.size();
        let mut visited: BitVec = BitVec::repeat(false, n);
        let mut predecessor = vec![None; n];
        let mut path_weight = vec![NO_EDGE; n];
        visited.set(start, true);
        path_weight[start] = 0.0;

        let mut queue = BinaryHeap::with_capacity(n);
        for index in (0..n).filter(|&index| index != start) {
            if let Some(cost) = self.edge_cost(start, index) {
                path_weight[index] = cost;
                predecessor[index] = Some(start);
            }
            queue.push(Reverse(Candidate::new(path_weight[index], index)));
        }

        while let Some(Reverse(Candidate { weight, index })) = queue.pop() {
            if visited[index] || weight != path_weight[index] {
                continue;
            }
            if weight == NO_EDGE {
                break;
            }
            visited.set(index, true);
            if index == target {
                break;
            }
            for neighbor in self.neighbor_indices(index) {
                if visited[neighbor] {
                    continue;
                }
                let Some(cost) = self.edge_cost(index, neighbor) else {
                    continue;
                };
                let candidate = path_weight[index] + cost;
                if candidate < path_weight[neighbor] {
                    path_weight[neighbor] = candidate;
                    predecessor[neighbor] = Some(index);
                    queue.push(Reverse(Candidate::new(candidate, neighbor)));
                }
            }
        }

        if !visited[target] {
            debug!("target unreachable");
            return Vec::new();
        }
        walk_predecessors(&predecessor, start, target)
    }
}

/// An entry in the priority queue of the weighted search, ordered by weight
/// and then by index.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    weight: f64,
    index: usize,
}

impl Candidate {
    fn new(weight: f64, index: usize) -> Self {
        Self { weight, index }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.index.cmp(&other.index))
    }
}

impl<T: PartialEq> Graph<T> {
    /// Finds a path from `start` to `target` with the fewest edges.
    ///
    /// Returns an empty path if either vertex is missing, if they are the
    /// same vertex, or if `target` is unreachable.
    pub fn shortest_path(&self, start: &T, target: &T) -> Path<'_, T> {
        match self.resolve_pair(start, target) {
            Ok((start, target)) => self.path_from_indices(self.hop_path_indices(start, target)),
            Err(_) => Path::empty(),
        }
    }

    /// Gets the number of edges on the shortest path from `start` to
    /// `target`, or zero if there is no such path.
    pub fn shortest_path_length(&self, start: &T, target: &T) -> usize {
        self.shortest_path(start, target).num_edges()
    }
}

impl<T: PartialEq> Network<T> {
    /// Finds the path from `start` to `target` with the least total weight.
    ///
    /// Returns an empty path if either vertex is missing, if they are the
    /// same vertex, or if `target` is unreachable.
    pub fn shortest_path(&self, start: &T, target: &T) -> Path<'_, T> {
        match self.resolve_pair(start, target) {
            Ok((start, target)) => {
                self.path_from_indices(self.weighted_path_indices(start, target))
            }
            Err(_) => Path::empty(),
        }
    }

    /// Gets the number of edges on the least-weight path from `start` to
    /// `target`, or zero if there is no such path.
    pub fn shortest_path_length(&self, start: &T, target: &T) -> usize {
        self.shortest_path(start, target).num_edges()
    }

    /// Gets the total weight of the least-weight path from `start` to
    /// `target`, or infinity if there is no such path.
    pub fn shortest_path_weight(&self, start: &T, target: &T) -> f64 {
        self.shortest_path(start, target).weight()
    }
}
