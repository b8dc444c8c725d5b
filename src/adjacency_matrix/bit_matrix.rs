use bitvec::vec::BitVec;

use super::AdjacencyMatrix;

/// Bit-packed adjacency matrix recording only the presence of edges.
///
/// Entries are stored row-major in a single `BitVec` of `capacity *
/// capacity` bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatrix {
    bits: BitVec,
    capacity: usize,
}

impl BitMatrix {
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.capacity && col < self.capacity);
        row * self.capacity + col
    }
}

impl AdjacencyMatrix for BitMatrix {
    type Weight = ();

    fn with_capacity(capacity: usize) -> Self {
        let mut bits = BitVec::with_capacity(capacity * capacity);
        bits.resize(capacity * capacity, false);
        Self { bits, capacity }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get(&self, row: usize, col: usize) -> Option<()> {
        self.bits[self.index(row, col)].then_some(())
    }

    fn set(&mut self, row: usize, col: usize, _weight: ()) {
        let index = self.index(row, col);
        self.bits.set(index, true);
    }

    fn clear(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.bits.set(index, false);
    }

    fn grown(&self, active: usize) -> Self {
        debug_assert!(active <= self.capacity);
        let mut larger = Self::with_capacity((self.capacity * 2).max(1));
        for row in 0..active {
            let old_start = self.index(row, 0);
            let new_start = larger.index(row, 0);
            larger.bits[new_start..new_start + active]
                .copy_from_bitslice(&self.bits[old_start..old_start + active]);
        }
        larger
    }

    fn row(&self, row: usize, active: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.index(row, 0);
        self.bits[start..start + active].iter_ones()
    }
}
