//! Reference console narration sink.

use std::io::{self, BufRead, Write};

use crate::engine::{FrontierEntry, TraceEvent, TraceSink};
use crate::graph::MstEdge;

/// Renders each trace event as console text, in the reference narration
/// style. With `pause` set it waits for Enter at the end of every step —
/// pacing is this sink's concern, never the engine's.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    pause: bool,
}

impl ConsoleSink {
    pub fn new(pause: bool) -> Self {
        Self { pause }
    }

    fn wait_for_enter(&self) {
        if !self.pause {
            return;
        }
        print!("Press Enter to continue...");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

impl TraceSink for ConsoleSink {
    fn emit(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::RunStarted {
                start,
                vertex_count,
            } => {
                println!("Starting Prim from: {start}\n");
                println!("Total vertices: {vertex_count}\n");
            }
            TraceEvent::FrontierSnapshot { step, entries } => {
                println!("Step {step}: frontier (sorted): {}", fmt_entries(entries));
            }
            TraceEvent::EdgeSkipped { from, to, .. } => {
                println!("  - Skipping edge {from}-{to} (vertex {to} already visited)");
                self.wait_for_enter();
            }
            TraceEvent::EdgeSelected {
                edge,
                visited,
                mst_edges,
                total_weight,
            } => {
                println!(
                    "  + Selected edge: {} - {} (weight {})",
                    edge.from, edge.to, edge.weight
                );
                println!("    Visited vertices: [{}]", visited.join(", "));
                println!("    MST so far (edges): {}", fmt_edges(mst_edges));
                println!("    Accumulated weight: {total_weight}\n");
            }
            TraceEvent::FrontierExpanded { from, added } => {
                if added.is_empty() {
                    println!("    No new frontier edges from {from}");
                } else {
                    println!(
                        "    Pushed frontier edges from {from}: {}",
                        fmt_entries(added)
                    );
                }
                self.wait_for_enter();
            }
            TraceEvent::RunFinished {
                total_weight,
                edges,
                disconnected,
            } => {
                if *disconnected {
                    println!(
                        "\nWarning: the graph is not connected. The result is a spanning forest."
                    );
                } else {
                    println!("\nCompleted: all vertices visited.");
                }
                println!("Total MST weight: {total_weight}");
                println!("MST edges: {}", fmt_edges(edges));
            }
        }
    }
}

pub(crate) fn fmt_entries(entries: &[FrontierEntry]) -> String {
    let inner: Vec<String> = entries
        .iter()
        .map(|e| format!("({}-{}:{})", e.from, e.to, e.weight))
        .collect();
    format!("[{}]", inner.join(", "))
}

pub(crate) fn fmt_edges(edges: &[MstEdge]) -> String {
    let inner: Vec<String> = edges
        .iter()
        .map(|e| format!("({}-{}:{})", e.from, e.to, e.weight))
        .collect();
    format!("[{}]", inner.join(", "))
}
