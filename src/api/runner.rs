//! High-level simulation runner and builder.
//!
//! [`SimulationRunner`] (constructed via [`SimulationRunnerBuilder`]) is the
//! main entry point for running a full simulation over a built graph: it
//! resolves the start vertex, drives the traversal engine against the
//! configured sink, and resolves the optional tree-path lookup over the
//! result.

use crate::engine::{find_path, MstResult, PrimEngine, TraceSink, TreePath};
use crate::error::EngineError;
use crate::graph::Graph;

use super::console::ConsoleSink;

/// Caller-supplied run configuration.
///
/// `start` falls back to the first vertex in load order when unset; an
/// explicit but unknown start aborts the run before the engine is invoked.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub start: Option<String>,
    pub target: Option<String>,
    pub pause: bool,
}

/// Everything one simulation produced.
#[derive(Debug)]
pub struct SimulationReport {
    /// The resolved start vertex.
    pub start: String,
    /// The target vertex the path lookup ran against, if any.
    pub target: Option<String>,
    pub mst: MstResult,
    /// The tree path to `target`; `None` when no target was set or the
    /// target is not reachable in the produced tree.
    pub path: Option<TreePath>,
}

/// Simulation runner with builder-based configuration.
///
/// Use [`SimulationRunner::builder(graph)`](Self::builder) to obtain a
/// [`SimulationRunnerBuilder`].
pub struct SimulationRunner;

impl SimulationRunner {
    /// Create a new builder around a built graph.
    pub fn builder(graph: Graph) -> SimulationRunnerBuilder {
        SimulationRunnerBuilder {
            graph,
            config: RunConfig::default(),
            sink: None,
        }
    }
}

/// Builder for configuring and launching a simulation run.
pub struct SimulationRunnerBuilder {
    graph: Graph,
    config: RunConfig,
    sink: Option<Box<dyn TraceSink>>,
}

impl SimulationRunnerBuilder {
    /// Set the start vertex explicitly.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.config.start = Some(start.into());
        self
    }

    /// Set a target vertex for the tree-path lookup.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.config.target = Some(target.into());
        self
    }

    /// Pause after every step (only meaningful for the default console sink).
    pub fn pause(mut self, pause: bool) -> Self {
        self.config.pause = pause;
        self
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom narration sink instead of the default [`ConsoleSink`].
    pub fn sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run the simulation.
    pub fn run(self) -> Result<SimulationReport, EngineError> {
        let start = match self.config.start {
            Some(start) => {
                if !self.graph.contains(&start) {
                    return Err(EngineError::UnknownStartVertex(start));
                }
                start
            }
            None => self
                .graph
                .first_vertex()
                .ok_or(EngineError::EmptyGraph)?
                .to_string(),
        };

        let mut sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new(self.config.pause)));

        let engine = PrimEngine::new(&self.graph);
        let mst = engine.run(&start, sink.as_mut())?;

        let target = self.config.target;
        let path = target
            .as_deref()
            .and_then(|target| find_path(&mst.edges, &start, target));

        Ok(SimulationReport {
            start,
            target,
            mst,
            path,
        })
    }
}
