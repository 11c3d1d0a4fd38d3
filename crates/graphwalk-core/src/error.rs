//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown strategy)
//! - 3: Data error (unknown node, malformed graph, no path)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed graph, unreachable target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building, traversing or querying a graph
#[derive(Error, Debug)]
pub enum WalkError {
    // Usage errors (exit code 2)
    #[error("unknown strategy: {0} (expected: {expected})", expected = crate::graph::Strategy::NAMES.join(", "))]
    UnknownStrategy(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no path from node {from} to node {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("shortest path requested before calculate()")]
    NotCalculated,

    #[error("node {node} has not been visited")]
    NotVisited { node: NodeId },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WalkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id the graph does not contain
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        WalkError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a malformed graph description
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        WalkError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WalkError::UnknownStrategy(_)
            | WalkError::UnknownFormat(_)
            | WalkError::UsageError(_)
            | WalkError::InvalidValue { .. } => ExitCode::Usage,

            WalkError::NoPath { .. }
            | WalkError::NotCalculated
            | WalkError::NotVisited { .. }
            | WalkError::UnknownNode { .. }
            | WalkError::InvalidGraph { .. } => ExitCode::Data,

            WalkError::Io(_) | WalkError::Json(_) | WalkError::Toml(_) | WalkError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WalkError::UnknownStrategy(_) => "unknown_strategy",
            WalkError::UnknownFormat(_) => "unknown_format",
            WalkError::UsageError(_) => "usage_error",
            WalkError::InvalidValue { .. } => "invalid_value",
            WalkError::NoPath { .. } => "no_path",
            WalkError::NotCalculated => "not_calculated",
            WalkError::NotVisited { .. } => "not_visited",
            WalkError::UnknownNode { .. } => "unknown_node",
            WalkError::InvalidGraph { .. } => "invalid_graph",
            WalkError::Io(_) => "io_error",
            WalkError::Json(_) => "json_error",
            WalkError::Toml(_) => "toml_error",
            WalkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, WalkError>;
