pub mod adjacency_matrix;
pub mod error;
pub mod graph;
pub mod path;
pub mod search;
pub mod tracing_support;

mod display;
mod vertices;

pub use error::{GraphError, Result};
pub use graph::{DEFAULT_CAPACITY, Graph, MatrixGraph, Network};
pub use path::Path;
