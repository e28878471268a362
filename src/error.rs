//! Error types for graph operations.

/// Errors that can occur while building or querying a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The interval text is not of the form `<start>-<end>`.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// An operation referenced a node that is not in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// A node with the same label is already in the graph.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// The edge is already in the graph.
    #[error("Duplicate edge: ({from}, {to})")]
    DuplicateEdge { from: String, to: String },

    /// The edge is not in the graph.
    #[error("Edge not found: ({from}, {to})")]
    EdgeNotFound { from: String, to: String },

    /// A matrix operation needs numeric node labels.
    #[error("Node label is not a non-negative integer: {0}")]
    NonNumericLabel(String),
}

impl GraphError {
    pub(crate) fn duplicate_edge(from: &str, to: &str) -> Self {
        Self::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
