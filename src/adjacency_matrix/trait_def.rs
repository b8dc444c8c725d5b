use std::fmt::Debug;

/// The value stored for an edge in an adjacency matrix.
pub trait EdgeWeight: Copy + Debug + PartialEq {
    /// True if the value carries a meaningful weight that should be reported
    /// alongside the edge.
    const WEIGHTED: bool;

    /// Returns the amount this edge contributes to the weight of a path.
    fn cost(self) -> f64;
}

impl EdgeWeight for () {
    const WEIGHTED: bool = false;

    fn cost(self) -> f64 {
        1.0
    }
}

impl EdgeWeight for f64 {
    const WEIGHTED: bool = true;

    fn cost(self) -> f64 {
        self
    }
}

/// Trait for dense square adjacency matrices with an explicit capacity.
///
/// Only the top-left `active x active` submatrix is ever meaningful; every
/// entry outside of it must read as "no edge".  Callers are responsible for
/// keeping `row` and `col` below [`Self::capacity`].
pub trait AdjacencyMatrix
where
    Self: Sized,
{
    type Weight: EdgeWeight;

    /// Creates a matrix with `capacity` rows and columns, all empty.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of rows (and columns) the matrix can hold.
    fn capacity(&self) -> usize;

    /// Gets the weight of the entry at `row` and `col`, or `None` if there is
    /// no edge.
    fn get(&self, row: usize, col: usize) -> Option<Self::Weight>;

    /// Stores `weight` at `row` and `col`.
    fn set(&mut self, row: usize, col: usize, weight: Self::Weight);

    /// Resets the entry at `row` and `col` to "no edge".
    fn clear(&mut self, row: usize, col: usize);

    /// Returns a copy of the matrix with twice the capacity.  Only the
    /// `active x active` submatrix is carried over.
    fn grown(&self, active: usize) -> Self;

    /// Returns true if there is an edge at `row` and `col`.
    fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Iterates over the columns of `row` below `active` that hold an edge,
    /// in ascending order.
    fn row(&self, row: usize, active: usize) -> impl Iterator<Item = usize> + '_ {
        (0..active).filter(move |&col| self.contains(row, col))
    }

    /// Removes row and column `pos` from the `active x active` submatrix.
    /// Every later row and column moves down by one, and the vacated last row
    /// and column are left empty.
    fn remove_index(&mut self, pos: usize, active: usize) {
        debug_assert!(pos < active);
        for i in 0..active {
            self.clear(pos, i);
            self.clear(i, pos);
        }
        for row in pos..active - 1 {
            for col in 0..active {
                self.move_entry((row + 1, col), (row, col));
            }
        }
        for col in pos..active - 1 {
            for row in 0..active - 1 {
                self.move_entry((row, col + 1), (row, col));
            }
        }
        for i in 0..active {
            self.clear(active - 1, i);
            self.clear(i, active - 1);
        }
    }

    /// Copies the entry at `from` to `to`, including its absence.
    fn move_entry(&mut self, from: (usize, usize), to: (usize, usize)) {
        match self.get(from.0, from.1) {
            Some(weight) => self.set(to.0, to.1, weight),
            None => self.clear(to.0, to.1),
        }
    }
}
