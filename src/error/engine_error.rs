//! Traversal error types.

use thiserror::Error;

/// Errors a traversal run can fail with.
///
/// Once the preconditions hold, the run itself is total; these are the only
/// ways in.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("start vertex not found in graph: {0}")]
    UnknownStartVertex(String),
    #[error("cannot run on an empty graph")]
    EmptyGraph,
}
