//! Error types for the simulator.
//!
//! - [`GraphError`] — Errors raised while loading, parsing, or building a graph.
//! - [`EngineError`] — Errors raised when starting a traversal run.

pub mod engine_error;
pub mod graph_error;

pub use engine_error::EngineError;
pub use graph_error::GraphError;

/// Convenience alias for load- and build-stage results.
pub type GraphResult<T> = Result<T, GraphError>;
/// Convenience alias for traversal results.
pub type EngineResult<T> = Result<T, EngineError>;
