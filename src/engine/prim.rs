//! Lazy-Prim traversal over an immutable [`Graph`].
//!
//! The frontier is a min-priority heap of candidate edges. Stale entries
//! (candidates already attached by a cheaper edge) are discarded on pop
//! rather than removed on insert; the skip is narrated, not an error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::error::EngineError;
use crate::graph::{Graph, MstEdge};

use super::event::{FrontierEntry, TraceEvent, TraceSink};

/// Outcome of one traversal run.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    /// Selected edges, in selection order.
    pub edges: Vec<MstEdge>,
    pub total_weight: f64,
    /// Vertices reached from the start, sorted ascending.
    pub visited: Vec<String>,
    /// True when the frontier drained before reaching every vertex.
    pub disconnected: bool,
}

impl MstResult {
    /// Number of edges in the spanning tree (or forest component).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// The traversal engine. Borrows the graph; each [`run`](Self::run) owns its
/// frontier, visited set, and edge list, so a graph can back any number of
/// sequential runs.
pub struct PrimEngine<'g> {
    graph: &'g Graph,
}

impl<'g> PrimEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Run the traversal from `start`, narrating every decision to `sink`.
    ///
    /// Fails only on an unknown start vertex, before any event is emitted.
    /// On a disconnected graph the run still terminates and reports a
    /// spanning forest component with `disconnected` set.
    pub fn run(&self, start: &str, sink: &mut dyn TraceSink) -> Result<MstResult, EngineError> {
        if !self.graph.contains(start) {
            return Err(EngineError::UnknownStartVertex(start.to_string()));
        }

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(start.to_string());
        let mut mst_edges: Vec<MstEdge> = Vec::new();
        let mut total_weight = 0.0_f64;

        let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
        for (neighbor, weight) in self.graph.neighbors(start) {
            frontier.push(Reverse(FrontierEntry {
                weight,
                from: start.to_string(),
                to: neighbor,
            }));
        }

        sink.emit(&TraceEvent::RunStarted {
            start: start.to_string(),
            vertex_count: self.graph.vertex_count(),
        });

        let mut step = 1_usize;
        while !frontier.is_empty() && visited.len() < self.graph.vertex_count() {
            let mut entries: Vec<FrontierEntry> =
                frontier.iter().map(|Reverse(e)| e.clone()).collect();
            entries.sort();
            sink.emit(&TraceEvent::FrontierSnapshot { step, entries });

            let entry = match frontier.pop() {
                Some(Reverse(entry)) => entry,
                None => break,
            };

            if visited.contains(&entry.to) {
                sink.emit(&TraceEvent::EdgeSkipped {
                    from: entry.from,
                    to: entry.to,
                    weight: entry.weight,
                });
                step += 1;
                continue;
            }

            visited.insert(entry.to.clone());
            let selected = MstEdge::new(entry.from, entry.to.clone(), entry.weight);
            mst_edges.push(selected.clone());
            total_weight += entry.weight;

            let mut visited_sorted: Vec<String> = visited.iter().cloned().collect();
            visited_sorted.sort();
            sink.emit(&TraceEvent::EdgeSelected {
                edge: selected,
                visited: visited_sorted,
                mst_edges: mst_edges.clone(),
                total_weight,
            });

            let mut added = Vec::new();
            for (neighbor, weight) in self.graph.neighbors(&entry.to) {
                if !visited.contains(&neighbor) {
                    let candidate = FrontierEntry {
                        weight,
                        from: entry.to.clone(),
                        to: neighbor,
                    };
                    frontier.push(Reverse(candidate.clone()));
                    added.push(candidate);
                }
            }
            sink.emit(&TraceEvent::FrontierExpanded {
                from: entry.to,
                added,
            });

            step += 1;
        }

        let disconnected = visited.len() < self.graph.vertex_count();
        let mut visited_sorted: Vec<String> = visited.into_iter().collect();
        visited_sorted.sort();

        sink.emit(&TraceEvent::RunFinished {
            total_weight,
            edges: mst_edges.clone(),
            disconnected,
        });

        Ok(MstResult {
            edges: mst_edges,
            total_weight,
            visited: visited_sorted,
            disconnected,
        })
    }
}
