//! Graph document handling.
//!
//! A graph is described by a small structured document (JSON, YAML, or TOML)
//! with `nodes` and `edges` fields. [`parse_graph`] turns document text into
//! a [`GraphSchema`]; [`load_graph`] goes all the way from a file path to a
//! built [`Graph`](crate::graph::Graph).

pub mod loader;
pub mod parser;
pub mod schema;

pub use loader::{format_for_path, load_graph};
pub use parser::{parse_graph, GraphFormat};
pub use schema::{EdgeSchema, GraphSchema};
