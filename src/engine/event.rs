use std::sync::mpsc;

use serde::Serialize;

use crate::graph::MstEdge;

/// One frontier candidate: an edge from a tree vertex to a candidate vertex.
///
/// Ordering is weight ascending, then `from` token, then `to` token — the
/// natural tuple comparison the priority frontier pops by. Weights are
/// finite by construction, so the ordering is total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierEntry {
    pub weight: f64,
    pub from: String,
    pub to: String,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Trace event — one decision point of a traversal run.
///
/// Identical runs over the same graph produce identical event sequences, so
/// events carry the step counter rather than wall-clock data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TraceEvent {
    /// Run accepted; emitted before the first step.
    RunStarted { start: String, vertex_count: usize },

    /// Full frontier contents at the top of a step, sorted ascending.
    /// Observational only; the frontier itself is untouched.
    FrontierSnapshot {
        step: usize,
        entries: Vec<FrontierEntry>,
    },

    /// A popped entry whose candidate vertex was already in the tree.
    EdgeSkipped { from: String, to: String, weight: f64 },

    /// An edge was attached to the tree.
    EdgeSelected {
        edge: MstEdge,
        /// Visited set after the selection, sorted ascending.
        visited: Vec<String>,
        /// Selected edges so far, in selection order.
        mst_edges: Vec<MstEdge>,
        total_weight: f64,
    },

    /// Frontier candidates pushed from the newly attached vertex.
    /// `added` may be empty; that is still a reportable outcome.
    FrontierExpanded {
        from: String,
        added: Vec<FrontierEntry>,
    },

    /// Traversal finished (frontier drained or all vertices visited).
    RunFinished {
        total_weight: f64,
        edges: Vec<MstEdge>,
        disconnected: bool,
    },
}

/// Receives trace events in emission order.
///
/// A sink must not assume anything beyond ordering; the engine never lets a
/// sink alter its state. Console rendering, test capture, and channels all
/// satisfy this the same way.
pub trait TraceSink {
    fn emit(&mut self, event: &TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _event: &TraceEvent) {}
}

/// Sink that collects events for inspection, mainly in tests.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<TraceEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceSink for VecSink {
    fn emit(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Event sender half of a channel sink.
pub type EventSender = mpsc::Sender<TraceEvent>;

/// Event receiver half of a channel sink.
pub type EventReceiver = mpsc::Receiver<TraceEvent>;

/// Create an event channel; the sender implements [`TraceSink`].
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}

impl TraceSink for EventSender {
    fn emit(&mut self, event: &TraceEvent) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.send(event.clone());
    }
}
