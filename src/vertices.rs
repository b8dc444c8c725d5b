//! The vertex array of a graph and the lookup from vertex values to indices.

/// An ordered array of vertex values with an explicit capacity.
///
/// The vertex at index `i` is the one whose row and column in the adjacency
/// matrix is `i`.  The capacity always matches the side length of the
/// matrix.
#[derive(Clone, Debug)]
pub(crate) struct VertexArray<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> VertexArray<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Doubles the capacity.
    pub fn grow(&mut self) {
        self.capacity = (self.capacity * 2).max(1);
        self.values.reserve_exact(self.capacity - self.values.len());
    }

    /// Appends a vertex, returning its index.  The caller must make room
    /// first with [`Self::grow`].
    pub fn push(&mut self, value: T) -> usize {
        debug_assert!(!self.is_full());
        self.values.push(value);
        self.values.len() - 1
    }

    /// Removes the vertex at `index`, moving every later vertex down by one.
    pub fn remove(&mut self, index: usize) -> T {
        self.values.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns true if `index` refers to an active vertex.
    pub fn index_valid(&self, index: usize) -> bool {
        index < self.values.len()
    }

    /// Finds the index of the first vertex equal to `value`.
    pub fn find_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.values.iter().position(|v| v == value)
    }
}
