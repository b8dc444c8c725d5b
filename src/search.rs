//! Breadth-first and depth-first traversals over a [`MatrixGraph`].
//!
//! Both traversals are lazy: each call to `next` does only the work needed to
//! find the next vertex.  Neighbours are always considered in ascending index
//! order.

use std::{collections::VecDeque, iter::FusedIterator};

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{MatrixGraph, adjacency_matrix::AdjacencyMatrix, tracing_support::trace};

/// Marks `start` as visited if it is a valid index, returning it.
fn visit_start<T, M>(
    graph: &MatrixGraph<T, M>,
    visited: &mut BitVec,
    start: Option<usize>,
) -> Option<usize>
where
    M: AdjacencyMatrix,
{
    let start = start.filter(|&index| graph.index_valid(index))?;
    visited.set(start, true);
    Some(start)
}

/// Breadth-first traversal.  Vertices are yielded in the order they are
/// dequeued, so each layer is exhausted before the next one starts.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Bfs<'g, T, M> {
    graph: &'g MatrixGraph<T, M>,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'g, T, M> Bfs<'g, T, M>
where
    M: AdjacencyMatrix,
{
    pub(crate) fn new(graph: &'g MatrixGraph<T, M>, start: Option<usize>) -> Self {
        let mut visited: BitVec = BitVec::repeat(false, graph.size());
        let queue = visit_start(graph, &mut visited, start).into_iter().collect();
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, T, M> Iterator for Bfs<'g, T, M>
where
    M: AdjacencyMatrix,
{
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let index = self.queue.pop_front()?;
        for neighbor in graph.neighbor_indices(index) {
            if !self.visited[neighbor] {
                self.visited.set(neighbor, true);
                self.queue.push_back(neighbor);
            }
        }
        trace!(index, "bfs visit");
        graph.vertex(index)
    }
}

impl<'g, T, M> FusedIterator for Bfs<'g, T, M> where M: AdjacencyMatrix {}

/// Depth-first traversal.
///
/// A vertex is yielded as soon as it is pushed.  The vertex on top of the
/// stack stays there while it still has an unvisited neighbour; each step
/// descends into the lowest such neighbour, and the top is popped only once
/// it has none left.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Dfs<'g, T, M> {
    graph: &'g MatrixGraph<T, M>,
    visited: BitVec,
    stack: Vec<usize>,
    pending: Option<usize>,
}

impl<'g, T, M> Dfs<'g, T, M>
where
    M: AdjacencyMatrix,
{
    pub(crate) fn new(graph: &'g MatrixGraph<T, M>, start: Option<usize>) -> Self {
        let mut visited: BitVec = BitVec::repeat(false, graph.size());
        let start = visit_start(graph, &mut visited, start);
        Self {
            graph,
            visited,
            stack: start.into_iter().collect(),
            pending: start,
        }
    }
}

impl<'g, T, M> Iterator for Dfs<'g, T, M>
where
    M: AdjacencyMatrix,
{
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        if let Some(start) = self.pending.take() {
            return graph.vertex(start);
        }
        while let Some(&top) = self.stack.last() {
            let unvisited = graph
                .neighbor_indices(top)
                .find(|&neighbor| !self.visited[neighbor]);
            match unvisited {
                Some(index) => {
                    self.visited.set(index, true);
                    self.stack.push(index);
                    trace!(index, depth = self.stack.len(), "dfs visit");
                    return graph.vertex(index);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'g, T, M> FusedIterator for Dfs<'g, T, M> where M: AdjacencyMatrix {}
