//! # Primtrace — A Step-by-Step Prim MST Simulator
//!
//! `primtrace` runs Prim's minimum-spanning-tree algorithm over an
//! undirected weighted graph and narrates every decision it makes:
//!
//! - **Graph documents**: graphs load from JSON, YAML, or TOML files with
//!   `nodes` and `edges` fields; endpoints named only by edges are added
//!   implicitly.
//! - **Trace events**: the engine emits a structured [`TraceEvent`] per
//!   decision point (frontier snapshot, stale-entry skip, selection,
//!   expansion, completion) to any [`TraceSink`] — console narration, test
//!   capture, or a channel.
//! - **Lazy frontier**: candidates stay in the priority frontier until
//!   popped; entries that went stale are discarded on pop, and that skip is
//!   part of the narration.
//! - **Tree paths**: [`find_path`] resolves the unique path between two
//!   vertices of the produced spanning tree (or reports that none exists in
//!   a forest result).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use primtrace::{load_graph, SimulationRunner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = load_graph("graphs/example_graph.json")?;
//!     let report = SimulationRunner::builder(graph)
//!         .start("A")
//!         .target("E")
//!         .run()?;
//!     println!("MST weight: {}", report.mst.total_weight);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dsl;
pub mod engine;
pub mod error;
pub mod graph;

pub use crate::api::{ConsoleSink, RunConfig, SimulationReport, SimulationRunner};
pub use crate::dsl::{format_for_path, load_graph, parse_graph, GraphFormat, GraphSchema};
pub use crate::engine::{
    create_event_channel, find_path, EventReceiver, EventSender, FrontierEntry, MstResult,
    NullSink, PrimEngine, TraceEvent, TraceSink, TreePath, VecSink,
};
pub use crate::error::{EngineError, GraphError};
pub use crate::graph::{build_graph, Graph, MstEdge};
