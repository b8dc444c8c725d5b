//! Dense square adjacency matrices backing [`MatrixGraph`](crate::MatrixGraph).
//!
//! Two backends are provided: [`BitMatrix`], which records only whether an
//! edge exists, and [`WeightMatrix`], which records a real-valued weight per
//! edge.  Both grow by doubling and keep everything outside the active region
//! empty.

mod bit_matrix;
mod trait_def;
mod weight_matrix;

pub use bit_matrix::BitMatrix;
pub use trait_def::{AdjacencyMatrix, EdgeWeight};
pub use weight_matrix::{NO_EDGE, WeightMatrix};
