//! Graph construction and representation.
//!
//! The [`Graph`] is built once from a parsed [`GraphSchema`](crate::dsl::GraphSchema)
//! by [`build_graph`] and is read-only afterwards. It backs every traversal
//! run by the [`PrimEngine`](crate::engine::PrimEngine).

pub mod builder;
pub mod types;

pub use builder::{build_graph, Graph};
pub use types::{MstEdge, NodeIndexMap};
