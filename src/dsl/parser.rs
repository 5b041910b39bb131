//! Graph document parser: converts raw JSON/YAML/TOML text into [`GraphSchema`].

use super::schema::GraphSchema;
use crate::error::GraphError;

/// Supported graph document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// JSON format (`.json`).
    Json,
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
    /// TOML format (`.toml`).
    Toml,
}

/// Parse graph document content into a [`GraphSchema`].
pub fn parse_graph(content: &str, format: GraphFormat) -> Result<GraphSchema, GraphError> {
    match format {
        GraphFormat::Json => {
            serde_json::from_str(content).map_err(|e| GraphError::Parse(e.to_string()))
        }
        GraphFormat::Yaml => {
            serde_saphyr::from_str(content).map_err(|e| GraphError::Parse(e.to_string()))
        }
        GraphFormat::Toml => {
            // Parse TOML → toml::Value, then convert to serde_json::Value,
            // and finally deserialize into GraphSchema.  This two-step
            // conversion ensures the raw-typed weight field is handled
            // the same way in every format.
            let toml_val: toml::Value =
                toml::from_str(content).map_err(|e| GraphError::Parse(e.to_string()))?;
            let json_val = toml_value_to_json(toml_val);
            serde_json::from_value(json_val).map_err(|e| GraphError::Parse(e.to_string()))
        }
    }
}

/// Convert a [`toml::Value`] into a [`serde_json::Value`].
///
/// TOML does not have a null type, so `Datetime` values are stringified.
fn toml_value_to_json(val: toml::Value) -> serde_json::Value {
    match val {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_value_to_json).collect())
        }
        toml::Value::Table(tbl) => {
            let map: serde_json::Map<String, serde_json::Value> = tbl
                .into_iter()
                .map(|(k, v)| (k, toml_value_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let json = r#"{"nodes":["A","B"],"edges":[["A","B",1.0]]}"#;
        let schema = parse_graph(json, GraphFormat::Json).unwrap();
        assert_eq!(schema.nodes, vec!["A", "B"]);
        assert_eq!(schema.edges.len(), 1);
        assert_eq!(schema.edges[0].source(), "A");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
nodes: [A, B, C]
edges:
  - [A, B, 1.0]
  - [B, C, 2]
"#;
        let schema = parse_graph(yaml, GraphFormat::Yaml).unwrap();
        assert_eq!(schema.nodes.len(), 3);
        assert_eq!(schema.edges.len(), 2);
        assert_eq!(schema.edges[1].target(), "C");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
nodes = ["A", "B"]
edges = [["A", "B", 1.0]]
"#;
        let schema = parse_graph(toml_str, GraphFormat::Toml).unwrap();
        assert_eq!(schema.nodes, vec!["A", "B"]);
        assert_eq!(schema.edges.len(), 1);
    }

    #[test]
    fn test_parse_toml_integer_weight() {
        let toml_str = r#"
edges = [["A", "B", 3]]
"#;
        let schema = parse_graph(toml_str, GraphFormat::Toml).unwrap();
        assert_eq!(schema.edges[0].raw_weight(), &serde_json::json!(3));
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(parse_graph("{{{invalid", GraphFormat::Json).is_err());
    }

    #[test]
    fn test_parse_yaml_invalid() {
        assert!(parse_graph("nodes: [A, {unclosed", GraphFormat::Yaml).is_err());
    }

    #[test]
    fn test_parse_toml_invalid() {
        assert!(parse_graph("[[[bad", GraphFormat::Toml).is_err());
    }

    #[test]
    fn test_parse_json_empty() {
        assert!(parse_graph("", GraphFormat::Json).is_err());
    }

    #[test]
    fn test_parse_json_missing_fields() {
        let schema = parse_graph("{}", GraphFormat::Json).unwrap();
        assert!(schema.nodes.is_empty());
        assert!(schema.edges.is_empty());
    }

    #[test]
    fn test_toml_value_to_json_table() {
        let mut table = toml::map::Map::new();
        table.insert("key".into(), toml::Value::String("value".into()));
        let json_val = toml_value_to_json(toml::Value::Table(table));
        assert_eq!(json_val, serde_json::json!({"key": "value"}));
    }

    #[test]
    fn test_toml_value_to_json_mixed_array() {
        let arr = toml::Value::Array(vec![
            toml::Value::String("A".into()),
            toml::Value::Integer(2),
            toml::Value::Float(0.5),
        ]);
        assert_eq!(toml_value_to_json(arr), serde_json::json!(["A", 2, 0.5]));
    }
}
