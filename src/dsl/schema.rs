use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Graph document schema.
///
/// The document has two top-level fields, both optional:
///
/// ```json
/// {
///   "nodes": ["A", "B", "C"],
///   "edges": [["A", "B", 1.0], ["B", "C", 2]]
/// }
/// ```
///
/// Vertices named only by an edge endpoint are legal; the builder adds them
/// implicitly.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GraphSchema {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSchema>,
}

/// One edge entry: `[source, target, weight]`.
///
/// The weight is kept as a raw [`Value`] so that a non-numeric entry fails
/// with `InvalidWeight` (naming the offending edge) instead of a generic
/// parse error.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EdgeSchema(pub String, pub String, pub Value);

impl EdgeSchema {
    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn target(&self) -> &str {
        &self.1
    }

    pub fn raw_weight(&self) -> &Value {
        &self.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_deserializes_edge_tuples() {
        let schema: GraphSchema =
            serde_json::from_value(json!({"nodes": ["A"], "edges": [["A", "B", 1.5]]})).unwrap();
        assert_eq!(schema.nodes, vec!["A"]);
        assert_eq!(schema.edges.len(), 1);
        assert_eq!(schema.edges[0].source(), "A");
        assert_eq!(schema.edges[0].target(), "B");
        assert_eq!(schema.edges[0].raw_weight(), &json!(1.5));
    }

    #[test]
    fn test_schema_fields_default_to_empty() {
        let schema: GraphSchema = serde_json::from_str("{}").unwrap();
        assert!(schema.nodes.is_empty());
        assert!(schema.edges.is_empty());
    }
}
