//! File loading: read a graph document from disk and build the [`Graph`].

use std::fs;
use std::path::Path;

use crate::error::GraphError;
use crate::graph::{build_graph, Graph};

use super::parser::{parse_graph, GraphFormat};

/// Infer the document format from a file extension.
pub fn format_for_path(path: &Path) -> Result<GraphFormat, GraphError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "json" => Ok(GraphFormat::Json),
        "yaml" | "yml" => Ok(GraphFormat::Yaml),
        "toml" => Ok(GraphFormat::Toml),
        other => Err(GraphError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a graph document from `path` and build the graph.
///
/// Fails fast: missing files, malformed documents, bad weights, and
/// zero-vertex results are all rejected here, before any traversal.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let path = path.as_ref();
    let format = format_for_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let schema = parse_graph(&content, format)?;
    let graph = build_graph(&schema)?;
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    tracing::debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        "graph loaded"
    );
    Ok(graph)
}
