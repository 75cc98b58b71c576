//! Error types and exit codes for airnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad node reference)
//! - 3: Data error (invalid network configuration or edge)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Process exit codes for the airnet CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid network definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during airnet operations
#[derive(Error, Debug)]
pub enum AirnetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid start node {node} (graph has {node_count} nodes)")]
    InvalidStartNode { node: NodeId, node_count: usize },

    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    // Data errors (exit code 3)
    #[error("invalid edge {src} -> {dest} (graph has {node_count} nodes)")]
    InvalidEdge {
        src: i64,
        dest: i64,
        node_count: usize,
    },

    #[error("invalid weight {weight} on edge {src} -> {dest} (weights must be between 0 and 4294967295)")]
    InvalidWeight { src: i64, dest: i64, weight: i64 },

    #[error("invalid network config: {reason}")]
    InvalidConfig { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl AirnetError {
    /// Create an error for an edge whose endpoints fall outside the graph
    pub fn invalid_edge(src: i64, dest: i64, node_count: usize) -> Self {
        AirnetError::InvalidEdge {
            src,
            dest,
            node_count,
        }
    }

    /// Create an error for an invalid network configuration
    pub fn invalid_config(reason: impl std::fmt::Display) -> Self {
        AirnetError::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AirnetError::UnknownFormat(_)
            | AirnetError::UsageError(_)
            | AirnetError::InvalidStartNode { .. }
            | AirnetError::NodeOutOfRange { .. }
            | AirnetError::UnknownNode(_) => ExitCode::Usage,

            AirnetError::InvalidEdge { .. }
            | AirnetError::InvalidWeight { .. }
            | AirnetError::InvalidConfig { .. }
            | AirnetError::Toml(_) => ExitCode::Data,

            AirnetError::Io(_)
            | AirnetError::Json(_)
            | AirnetError::TomlSer(_)
            | AirnetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            AirnetError::UnknownFormat(_) => "unknown_format",
            AirnetError::UsageError(_) => "usage_error",
            AirnetError::InvalidStartNode { .. } => "invalid_start_node",
            AirnetError::NodeOutOfRange { .. } => "node_out_of_range",
            AirnetError::UnknownNode(_) => "unknown_node",
            AirnetError::InvalidEdge { .. } => "invalid_edge",
            AirnetError::InvalidWeight { .. } => "invalid_weight",
            AirnetError::InvalidConfig { .. } => "invalid_config",
            AirnetError::Io(_) => "io_error",
            AirnetError::Json(_) => "json_error",
            AirnetError::Toml(_) => "toml_error",
            AirnetError::TomlSer(_) => "toml_error",
            AirnetError::Other(_) => "other",
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

/// Result type alias for airnet operations
pub type Result<T> = std::result::Result<T, AirnetError>;
