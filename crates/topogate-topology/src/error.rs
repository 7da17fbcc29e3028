//! Topology error types.

use thiserror::Error;

/// Result type alias for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors that can occur while mutating the candidate node list.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("node already present: {0}")]
    DuplicateNode(String),
}
