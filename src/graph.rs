use crate::{
    adjacency_matrix::{AdjacencyMatrix, BitMatrix, EdgeWeight, NO_EDGE, WeightMatrix},
    error::{GraphError, Result},
    search::{Bfs, Dfs},
    tracing_support::debug,
    vertices::VertexArray,
};

/// Number of vertices a new graph has room for before it first grows.
pub const DEFAULT_CAPACITY: usize = 16;

/// An undirected graph whose edges carry no data.
pub type Graph<T> = MatrixGraph<T, BitMatrix>;

/// An undirected graph whose edges carry a positive `f64` weight.
pub type Network<T> = MatrixGraph<T, WeightMatrix>;

/// An undirected simple graph stored as a dense adjacency matrix.
///
/// Vertices are identified by value: every operation that takes a vertex
/// looks it up by equality, and the first match wins.  Each vertex occupies
/// one row and column of the matrix; removing a vertex moves every vertex
/// added after it down by one index.
///
/// Mutating operations report failures through [`GraphError`].  Queries
/// (traversals, shortest paths) treat an unknown vertex as having no
/// neighbours and return an empty result instead.
#[derive(Clone)]
pub struct MatrixGraph<T, M> {
    pub(crate) vertices: VertexArray<T>,
    pub(crate) adjacency: M,
}

impl<T, M> MatrixGraph<T, M>
where
    M: AdjacencyMatrix,
{
    /// Creates an empty graph with room for [`DEFAULT_CAPACITY`] vertices.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty graph with room for `capacity` vertices (at least
    /// one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            vertices: VertexArray::with_capacity(capacity),
            adjacency: M::with_capacity(capacity),
        }
    }

    /// Gets the number of vertices in the graph.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    /// Gets the number of vertices the graph can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Returns true if `index` refers to a vertex currently in the graph.
    pub fn index_valid(&self, index: usize) -> bool {
        self.vertices.index_valid(index)
    }

    /// Gets the vertex stored at `index`.
    pub fn vertex(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    /// Iterates over the vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.as_slice().iter()
    }

    /// Adds a vertex after all existing ones, doubling the capacity first if
    /// the graph is full.  The new vertex has no edges.
    pub fn add_vertex(&mut self, vertex: T) {
        if self.vertices.is_full() {
            let active = self.vertices.len();
            self.adjacency = self.adjacency.grown(active);
            self.vertices.grow();
            debug!(
                capacity = self.vertices.capacity(),
                "grew adjacency matrix"
            );
        }
        let index = self.vertices.push(vertex);
        debug_assert!(self.adjacency.row(index, index + 1).next().is_none());
        debug!(index, size = self.size(), "added vertex");
    }

    pub(crate) fn has_edge_at(&self, index1: usize, index2: usize) -> bool {
        self.adjacency.contains(index1, index2)
    }

    /// Iterates over the indices adjacent to `index`, in ascending order.
    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.row(index, self.vertices.len())
    }

    /// Gets the path cost of the edge at `index1` and `index2`.
    pub(crate) fn edge_cost(&self, index1: usize, index2: usize) -> Option<f64> {
        self.adjacency.get(index1, index2).map(EdgeWeight::cost)
    }

    fn insert_edge(&mut self, index1: usize, index2: usize, weight: M::Weight) {
        if !self.adjacency.contains(index1, index2) || !self.adjacency.contains(index2, index1) {
            self.adjacency.set(index1, index2, weight);
            self.adjacency.set(index2, index1, weight);
            debug!(index1, index2, ?weight, "added edge");
        }
    }

    /// Removes all vertices and edges, keeping the current capacity.
    pub fn clear(&mut self) {
        let capacity = self.vertices.capacity();
        self.vertices = VertexArray::with_capacity(capacity);
        self.adjacency = M::with_capacity(capacity);
    }

    /// Returns true if the adjacency matrix is symmetric over the active
    /// vertices and the graph is not empty.
    ///
    /// This does not test whether every vertex can reach every other one; see
    /// [`Self::is_fully_connected`] for that.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let n = self.size();
        (0..n).all(|i| {
            (0..n).all(|j| self.adjacency.contains(i, j) == self.adjacency.contains(j, i))
        })
    }

    /// Iterates over every edge once, as `(vertex1, vertex2, weight)` with
    /// the index of `vertex1` no greater than that of `vertex2`.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T, M::Weight)> + '_ {
        let values = self.vertices.as_slice();
        (0..values.len()).flat_map(move |i| {
            self.neighbor_indices(i)
                .filter(move |&j| j >= i)
                .filter_map(move |j| {
                    let weight = self.adjacency.get(i, j)?;
                    Some((&values[i], &values[j], weight))
                })
        })
    }
}

impl<T, M> MatrixGraph<T, M>
where
    T: PartialEq,
    M: AdjacencyMatrix,
{
    /// Finds the current index of `vertex`.
    pub fn find_index(&self, vertex: &T) -> Option<usize> {
        self.vertices.find_index(vertex)
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.find_index(vertex).is_some()
    }

    /// Removes a vertex along with all edges touching it, returning the
    /// stored value.  Every vertex with a higher index moves down by one.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        if self.is_empty() {
            return Err(GraphError::EmptyCollection);
        }
        let pos = self.find_index(vertex).ok_or(GraphError::InvalidVertex)?;
        self.adjacency.remove_index(pos, self.vertices.len());
        let removed = self.vertices.remove(pos);
        debug!(index = pos, size = self.size(), "removed vertex");
        Ok(removed)
    }

    /// Removes the edge between two vertices, returning its weight.
    pub fn remove_edge(&mut self, vertex1: &T, vertex2: &T) -> Result<M::Weight> {
        if self.is_empty() {
            return Err(GraphError::EmptyCollection);
        }
        let (index1, index2) = self.resolve_pair(vertex1, vertex2)?;
        let weight = self
            .adjacency
            .get(index1, index2)
            .filter(|_| self.adjacency.contains(index2, index1))
            .ok_or(GraphError::InvalidEdge)?;
        self.adjacency.clear(index1, index2);
        self.adjacency.clear(index2, index1);
        debug!(index1, index2, "removed edge");
        Ok(weight)
    }

    /// Returns true if there is an edge between two vertices.  Unknown
    /// vertices have no edges.
    pub fn has_edge(&self, vertex1: &T, vertex2: &T) -> bool {
        self.resolve_pair(vertex1, vertex2)
            .is_ok_and(|(index1, index2)| self.has_edge_at(index1, index2))
    }

    /// Iterates over the vertices adjacent to `vertex` in index order.
    /// Unknown vertices have no neighbours.
    pub fn neighbors(&self, vertex: &T) -> impl Iterator<Item = &T> + '_ {
        let values = self.vertices.as_slice();
        self.find_index(vertex)
            .into_iter()
            .flat_map(move |index| self.neighbor_indices(index).map(move |i| &values[i]))
    }

    /// Breadth-first traversal from `start`.  Yields nothing if `start` is not
    /// in the graph.
    pub fn bfs(&self, start: &T) -> Bfs<'_, T, M> {
        Bfs::new(self, self.find_index(start))
    }

    /// Depth-first traversal from `start`.  Yields nothing if `start` is not
    /// in the graph.
    pub fn dfs(&self, start: &T) -> Dfs<'_, T, M> {
        Dfs::new(self, self.find_index(start))
    }

    /// Returns true if the graph is non-empty and every vertex is reachable
    /// from every other one.
    pub fn is_fully_connected(&self) -> bool {
        !self.is_empty() && Bfs::new(self, Some(0)).count() == self.size()
    }

    /// Partitions the vertices into connected components.  Each component
    /// lists its vertices in index order, and components are ordered by
    /// their first vertex.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<Vec<&T>> {
        use std::collections::HashSet;

        let starts: Vec<usize> = (0..self.size()).collect();
        let components: Vec<HashSet<usize>> =
            pathfinding::prelude::connected_components(&starts, |&index| {
                self.neighbor_indices(index).collect::<Vec<_>>()
            });
        let mut components: Vec<Vec<usize>> = components
            .into_iter()
            .map(|component| {
                let mut indices: Vec<usize> = component.into_iter().collect();
                indices.sort_unstable();
                indices
            })
            .collect();
        components.sort_unstable_by_key(|indices| indices[0]);
        let values = self.vertices.as_slice();
        components
            .into_iter()
            .map(|indices| indices.into_iter().map(|i| &values[i]).collect())
            .collect()
    }

    pub(crate) fn resolve_pair(&self, vertex1: &T, vertex2: &T) -> Result<(usize, usize)> {
        let index1 = self.find_index(vertex1).ok_or(GraphError::InvalidVertex)?;
        let index2 = self.find_index(vertex2).ok_or(GraphError::InvalidVertex)?;
        Ok((index1, index2))
    }
}

impl<T: PartialEq> Graph<T> {
    /// Adds an edge between two vertices.  Does nothing if the edge already
    /// exists.
    pub fn add_edge(&mut self, vertex1: &T, vertex2: &T) -> Result<()> {
        let (index1, index2) = self.resolve_pair(vertex1, vertex2)?;
        self.insert_edge(index1, index2, ());
        Ok(())
    }
}

impl<T: PartialEq> Network<T> {
    /// Adds an edge with the given weight between two vertices.  Does nothing
    /// if the edge already exists, even if its weight differs.
    ///
    /// Weights are expected to be finite and positive; an infinite weight is
    /// indistinguishable from no edge at all.
    pub fn add_edge(&mut self, vertex1: &T, vertex2: &T, weight: f64) -> Result<()> {
        let (index1, index2) = self.resolve_pair(vertex1, vertex2)?;
        self.insert_edge(index1, index2, weight);
        Ok(())
    }

    /// Gets the weight of the edge between two vertices, or
    /// [`NO_EDGE`](crate::adjacency_matrix::NO_EDGE) if there is none.
    pub fn edge_weight(&self, vertex1: &T, vertex2: &T) -> Result<f64> {
        let (index1, index2) = self.resolve_pair(vertex1, vertex2)?;
        Ok(self.adjacency.get(index1, index2).unwrap_or(NO_EDGE))
    }
}

impl<T, M> Default for MatrixGraph<T, M>
where
    M: AdjacencyMatrix,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_vertex(name);
        }
        graph.add_edge(&"A", &"B").unwrap();
        graph.add_edge(&"B", &"C").unwrap();
        graph.add_edge(&"C", &"D").unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_assigns_next_index() {
        let graph = path_graph();
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.find_index(&"A"), Some(0));
        assert_eq!(graph.find_index(&"D"), Some(3));
        assert_eq!(graph.find_index(&"E"), None);
        assert!(graph.index_valid(3));
        assert!(!graph.index_valid(4));
    }

    #[test]
    fn test_remove_vertex_shifts_later_indices() {
        let mut graph = path_graph();
        assert_eq!(graph.remove_vertex(&"B"), Ok("B"));
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.find_index(&"A"), Some(0));
        assert_eq!(graph.find_index(&"C"), Some(1));
        assert_eq!(graph.find_index(&"D"), Some(2));
        assert!(!graph.has_edge(&"A", &"C"));
        assert!(graph.has_edge(&"C", &"D"));
        assert!(graph.has_edge(&"D", &"C"));
    }

    #[test]
    fn test_remove_vertex_errors() {
        let mut graph = Graph::<u32>::new();
        assert_eq!(graph.remove_vertex(&1), Err(GraphError::EmptyCollection));
        graph.add_vertex(1);
        assert_eq!(graph.remove_vertex(&2), Err(GraphError::InvalidVertex));
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut graph = path_graph();
        assert_eq!(graph.add_edge(&"A", &"Z"), Err(GraphError::InvalidVertex));
        assert_eq!(graph.add_edge(&"Z", &"A"), Err(GraphError::InvalidVertex));
    }

    #[test]
    fn test_remove_edge_errors() {
        let mut graph = Graph::<&str>::new();
        assert_eq!(
            graph.remove_edge(&"A", &"B"),
            Err(GraphError::EmptyCollection)
        );
        let mut graph = path_graph();
        assert_eq!(graph.remove_edge(&"A", &"Z"), Err(GraphError::InvalidVertex));
        assert_eq!(graph.remove_edge(&"A", &"C"), Err(GraphError::InvalidEdge));
        assert_eq!(graph.remove_edge(&"B", &"A"), Ok(()));
        assert!(!graph.has_edge(&"A", &"B"));
        assert_eq!(graph.remove_edge(&"A", &"B"), Err(GraphError::InvalidEdge));
    }

    #[test]
    fn test_neighbors_in_index_order() {
        let mut graph = path_graph();
        graph.add_edge(&"B", &"D").unwrap();
        assert_eq!(graph.neighbors(&"B").collect::<Vec<_>>(), vec![&"A", &"C", &"D"]);
        assert_eq!(graph.neighbors(&"Z").count(), 0);
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = path_graph();
        let edges: Vec<_> = graph.edges().map(|(a, b, _)| (*a, *b)).collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C"), ("C", "D")]);
    }

    #[test]
    fn test_is_connected_checks_symmetry_only() {
        let mut graph = Graph::new();
        assert!(!graph.is_connected());
        graph.add_vertex(1);
        graph.add_vertex(2);
        assert!(graph.is_connected());
        assert!(!graph.is_fully_connected());
        graph.add_edge(&1, &2).unwrap();
        assert!(graph.is_fully_connected());
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut graph = Graph::with_capacity(2);
        for i in 0..5 {
            graph.add_vertex(i);
        }
        assert_eq!(graph.capacity(), 8);
        assert_eq!(graph.size(), 5);
    }

    #[test]
    fn test_clear() {
        let mut graph = path_graph();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.capacity(), DEFAULT_CAPACITY);
        graph.add_vertex("A");
        assert_eq!(graph.neighbors(&"A").count(), 0);
    }

    #[test]
    fn test_network_edge_weight() {
        let mut network = Network::new();
        network.add_vertex('a');
        network.add_vertex('b');
        network.add_vertex('c');
        network.add_edge(&'a', &'b', 2.5).unwrap();
        assert_eq!(network.edge_weight(&'a', &'b'), Ok(2.5));
        assert_eq!(network.edge_weight(&'b', &'a'), Ok(2.5));
        assert_eq!(network.edge_weight(&'a', &'c'), Ok(NO_EDGE));
        assert_eq!(network.edge_weight(&'a', &'z'), Err(GraphError::InvalidVertex));
    }

    #[test]
    fn test_network_add_existing_edge_keeps_weight() {
        let mut network = Network::new();
        network.add_vertex(1);
        network.add_vertex(2);
        network.add_edge(&1, &2, 1.0).unwrap();
        network.add_edge(&2, &1, 9.0).unwrap();
        assert_eq!(network.edge_weight(&1, &2), Ok(1.0));
        assert_eq!(network.remove_edge(&1, &2), Ok(1.0));
        assert_eq!(network.edge_weight(&1, &2), Ok(NO_EDGE));
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_connected_components() {
        let mut graph = Graph::new();
        for i in 0..6 {
            graph.add_vertex(i);
        }
        graph.add_edge(&0, &3).unwrap();
        graph.add_edge(&4, &1).unwrap();
        graph.add_edge(&3, &5).unwrap();
        assert_eq!(
            graph.connected_components(),
            vec![vec![&0, &3, &5], vec![&1, &4], vec![&2]]
        );
    }
}
