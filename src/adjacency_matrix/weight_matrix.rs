use super::AdjacencyMatrix;

/// Adjacency matrix storing a real-valued weight per edge.
///
/// `f64::INFINITY` marks the absence of an edge, so any finite weight is an
/// edge.  Entries are stored row-major in a flat vector.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    weights: Vec<f64>,
    capacity: usize,
}

/// The weight stored for a pair of vertices with no edge between them.
pub const NO_EDGE: f64 = f64::INFINITY;

impl WeightMatrix {
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.capacity && col < self.capacity);
        row * self.capacity + col
    }
}

impl AdjacencyMatrix for WeightMatrix {
    type Weight = f64;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: vec![NO_EDGE; capacity * capacity],
            capacity,
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get(&self, row: usize, col: usize) -> Option<f64> {
        let weight = self.weights[self.index(row, col)];
        (weight < NO_EDGE).then_some(weight)
    }

    fn set(&mut self, row: usize, col: usize, weight: f64) {
        let index = self.index(row, col);
        self.weights[index] = weight;
    }

    fn clear(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.weights[index] = NO_EDGE;
    }

    fn grown(&self, active: usize) -> Self {
        debug_assert!(active <= self.capacity);
        let mut larger = Self::with_capacity((self.capacity * 2).max(1));
        for row in 0..active {
            let old_start = self.index(row, 0);
            let new_start = larger.index(row, 0);
            larger.weights[new_start..new_start + active]
                .copy_from_slice(&self.weights[old_start..old_start + active]);
        }
        larger
    }
}
