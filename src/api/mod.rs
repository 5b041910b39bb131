//! High-level simulation surface.

pub mod console;
pub mod runner;

pub use console::ConsoleSink;
pub use runner::{RunConfig, SimulationReport, SimulationRunner, SimulationRunnerBuilder};
