use std::collections::HashSet;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;
use serde_json::Value;

use crate::dsl::GraphSchema;
use crate::error::GraphError;

use super::types::NodeIndexMap;

/// An undirected weighted graph, immutable once built.
///
/// Vertices are string tokens; the adjacency is symmetric by construction.
/// `order` records load order: declared nodes first, then implicitly added
/// edge endpoints. The first entry is the default start vertex.
#[derive(Debug)]
pub struct Graph {
    graph: StableUnGraph<String, f64>,
    node_index_map: NodeIndexMap,
    order: Vec<String>,
}

impl Graph {
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.node_index_map.contains_key(vertex)
    }

    /// Vertex tokens in load order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The first vertex in load order, if any.
    pub fn first_vertex(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// `(neighbor, weight)` pairs of `vertex`, in document order.
    ///
    /// Parallel edges yield one pair each. An unknown vertex has no
    /// neighbors.
    pub fn neighbors(&self, vertex: &str) -> Vec<(String, f64)> {
        let Some(&idx) = self.node_index_map.get(vertex) else {
            return Vec::new();
        };
        // Edge indices are assigned in insertion order and never reused
        // (nothing is removed after build); sorting by id restores document
        // order regardless of how petgraph chains incident edges.
        let mut incident: Vec<(usize, String, f64)> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id().index(), self.graph[other].clone(), *edge.weight())
            })
            .collect();
        incident.sort_by_key(|(id, _, _)| *id);
        incident.into_iter().map(|(_, v, w)| (v, w)).collect()
    }

    /// Deduplicated undirected edge listing, sorted by vertex token.
    ///
    /// Used for the interactive preview; parallel edges collapse to the
    /// first one encountered.
    pub fn edge_pairs(&self) -> Vec<(String, String, f64)> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut out = Vec::new();
        let mut vertices: Vec<&String> = self.order.iter().collect();
        vertices.sort();
        for u in vertices {
            for (v, w) in self.neighbors(u) {
                let pair = if *u <= v {
                    (u.clone(), v.clone())
                } else {
                    (v.clone(), u.clone())
                };
                if seen.insert(pair.clone()) {
                    out.push((pair.0, pair.1, w));
                }
            }
        }
        out
    }
}

/// Build a [`Graph`] from a parsed document schema.
///
/// Endpoints that never appear in `nodes` are added implicitly. Weights are
/// coerced to finite `f64` (numbers and numeric strings); anything else
/// fails with [`GraphError::InvalidWeight`]. Negative weights are accepted.
pub fn build_graph(schema: &GraphSchema) -> Result<Graph, GraphError> {
    fn intern(
        graph: &mut StableUnGraph<String, f64>,
        map: &mut NodeIndexMap,
        order: &mut Vec<String>,
        token: &str,
    ) -> NodeIndex {
        if let Some(&idx) = map.get(token) {
            return idx;
        }
        let idx = graph.add_node(token.to_string());
        map.insert(token.to_string(), idx);
        order.push(token.to_string());
        idx
    }

    let mut graph = StableUnGraph::<String, f64>::default();
    let mut node_index_map: NodeIndexMap = NodeIndexMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in &schema.nodes {
        intern(&mut graph, &mut node_index_map, &mut order, token);
    }

    for edge in &schema.edges {
        let weight =
            coerce_weight(edge.raw_weight()).ok_or_else(|| GraphError::InvalidWeight {
                from: edge.source().to_string(),
                to: edge.target().to_string(),
                value: edge.raw_weight().to_string(),
            })?;
        let source = intern(&mut graph, &mut node_index_map, &mut order, edge.source());
        let target = intern(&mut graph, &mut node_index_map, &mut order, edge.target());
        graph.add_edge(source, target, weight);
    }

    Ok(Graph {
        graph,
        node_index_map,
        order,
    })
}

/// Coerce a raw document value into a finite edge weight.
///
/// Numbers pass through; numeric strings are parsed (the reference loader
/// coerces with a plain float conversion, which accepts both).
fn coerce_weight(value: &Value) -> Option<f64> {
    let weight = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    weight.is_finite().then_some(weight)
}
