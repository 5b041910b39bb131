//! Load- and build-time error types.

use thiserror::Error;

/// Errors surfaced while loading or building a graph.
///
/// All of these are fatal and reported before any traversal starts.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot read graph file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("graph parse error: {0}")]
    Parse(String),
    #[error("unsupported graph format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid weight on edge {from}-{to}: {value}")]
    InvalidWeight {
        from: String,
        to: String,
        value: String,
    },
    #[error("graph has no vertices")]
    EmptyGraph,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_display() {
        assert_eq!(
            GraphError::Parse("x".into()).to_string(),
            "graph parse error: x"
        );
        assert_eq!(
            GraphError::UnsupportedFormat("ini".into()).to_string(),
            "unsupported graph format: ini"
        );
        assert_eq!(
            GraphError::InvalidWeight {
                from: "A".into(),
                to: "B".into(),
                value: "\"heavy\"".into(),
            }
            .to_string(),
            "invalid weight on edge A-B: \"heavy\""
        );
        assert_eq!(GraphError::EmptyGraph.to_string(), "graph has no vertices");
    }

    #[test]
    fn test_graph_error_io_carries_path() {
        let err = GraphError::Io {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.json"));
    }
}
