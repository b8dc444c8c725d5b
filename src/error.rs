use thiserror::Error;

/// Errors raised by the mutating operations of a graph or network.
///
/// Queries (traversals and shortest paths) never return these; they degrade
/// to an empty result instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A structural operation was attempted on a graph with no vertices.
    #[error("graph is empty")]
    EmptyCollection,

    /// A vertex argument does not resolve to a valid index.
    #[error("vertex not found in graph")]
    InvalidVertex,

    /// Edge removal was requested for a pair with no edge between them.
    #[error("no edge between the given vertices")]
    InvalidEdge,
}

pub type Result<T> = std::result::Result<T, GraphError>;
