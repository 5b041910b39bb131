//! The traversal engine and its trace event stream.
//!
//! [`PrimEngine`] walks an immutable [`Graph`](crate::graph::Graph) with a
//! lazy priority frontier, emitting a [`TraceEvent`] per decision point to a
//! caller-supplied [`TraceSink`]. [`find_path`] resolves the unique path
//! between two vertices of the produced tree.

pub mod event;
pub mod path;
pub mod prim;

pub use event::{
    create_event_channel, EventReceiver, EventSender, FrontierEntry, NullSink, TraceEvent,
    TraceSink, VecSink,
};
pub use path::{find_path, TreePath};
pub use prim::{MstResult, PrimEngine};
