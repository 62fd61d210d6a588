//! Error types for routing-engine
//!
//! Every failure is a validation failure on fixed input: nothing here is
//! retried, and no partial graph or routing table is ever returned.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for graph construction and route solving
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Two node records share an identifier but disagree on attributes
    #[error("Duplicate node '{id}' with conflicting attributes: {existing} vs {conflicting}")]
    DuplicateNode {
        id: String,
        existing: String,
        conflicting: String,
    },

    /// Edge endpoint is not in the node set
    #[error("Edge {source_id} -> {target_id} references unknown node '{missing}'")]
    DanglingEdge {
        source_id: String,
        target_id: String,
        missing: String,
    },

    /// Edge weight below zero
    #[error("Edge {source_id} -> {target_id} has negative weight {weight}")]
    NegativeWeight {
        source_id: String,
        target_id: String,
        weight: f64,
    },

    /// Edge weight is NaN or infinite
    #[error("Edge {source_id} -> {target_id} has non-finite weight {weight}")]
    InvalidWeight {
        source_id: String,
        target_id: String,
        weight: f64,
    },

    /// Node set does not fit the dense `u32` index space
    #[error("Graph has {nodes} nodes, at most {max} are supported")]
    GraphTooLarge { nodes: usize, max: usize },

    /// Path cost grew past the largest finite `f64`
    #[error("Path cost from '{source_id}' to '{target_id}' overflows f64")]
    CostOverflow { source_id: String, target_id: String },

    /// Solve requested for a node the graph does not contain
    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    /// All-pairs run stopped by an external cancellation signal
    #[error("Routing cancelled after {completed} of {total} sources")]
    Cancelled { completed: usize, total: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Stable error codes, used in logs and by callers that branch on failure type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateNode,
    DanglingEdge,
    NegativeWeight,
    InvalidWeight,
    GraphTooLarge,
    CostOverflow,
    UnknownNode,
    Cancelled,
    Config,
    Io,
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateNode => "duplicate_node",
            ErrorKind::DanglingEdge => "dangling_edge",
            ErrorKind::NegativeWeight => "negative_weight",
            ErrorKind::InvalidWeight => "invalid_weight",
            ErrorKind::GraphTooLarge => "graph_too_large",
            ErrorKind::CostOverflow => "cost_overflow",
            ErrorKind::UnknownNode => "unknown_node",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
            ErrorKind::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RoutingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoutingError::DuplicateNode { .. } => ErrorKind::DuplicateNode,
            RoutingError::DanglingEdge { .. } => ErrorKind::DanglingEdge,
            RoutingError::NegativeWeight { .. } => ErrorKind::NegativeWeight,
            RoutingError::InvalidWeight { .. } => ErrorKind::InvalidWeight,
            RoutingError::GraphTooLarge { .. } => ErrorKind::GraphTooLarge,
            RoutingError::CostOverflow { .. } => ErrorKind::CostOverflow,
            RoutingError::UnknownNode(_) => ErrorKind::UnknownNode,
            RoutingError::Cancelled { .. } => ErrorKind::Cancelled,
            RoutingError::Config(_) => ErrorKind::Config,
            RoutingError::Io(_) => ErrorKind::Io,
            RoutingError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    pub fn unknown_node(id: impl Into<String>) -> Self {
        RoutingError::UnknownNode(id.into())
    }

    pub fn dangling_edge(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        RoutingError::DanglingEdge {
            source_id: source_id.into(),
            target_id: target_id.into(),
            missing: missing.into(),
        }
    }
}

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoutingError::dangling_edge("A", "Z", "Z");
        let msg = err.to_string();
        assert!(msg.contains("A -> Z"));
        assert!(msg.contains("'Z'"));
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            RoutingError::unknown_node("X").kind(),
            ErrorKind::UnknownNode
        );
        assert_eq!(
            RoutingError::Cancelled {
                completed: 1,
                total: 3
            }
            .kind()
            .as_str(),
            "cancelled"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(RoutingError::from(io_err).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_negative_weight_message() {
        let err = RoutingError::NegativeWeight {
            source_id: "hub-1".to_string(),
            target_id: "hub-2".to_string(),
            weight: -3.5,
        };
        assert_eq!(
            err.to_string(),
            "Edge hub-1 -> hub-2 has negative weight -3.5"
        );
    }
}
