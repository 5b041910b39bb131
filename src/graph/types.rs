use petgraph::stable_graph::NodeIndex;
use serde::Serialize;

/// One selected spanning-tree edge, in the orientation it was chosen:
/// `from` was already in the tree, `to` was attached by this edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl MstEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Vertex token to petgraph `NodeIndex` mapping.
pub type NodeIndexMap = std::collections::HashMap<String, NodeIndex>;
