//! Error types and exit codes for rutter
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (rejected graph mutation, unresolvable route step)

use std::fmt;

use thiserror::Error;

/// Exit codes per rutter CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - rejected input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rutter operations
///
/// All graph-level rejections are non-fatal by policy: callers log them
/// and continue with the graph unchanged.
#[derive(Error, Debug)]
pub enum RutterError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    // Data errors (exit code 3)
    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("edge weight must be greater than zero: {from} -> {to}")]
    ZeroWeight { from: String, to: String },

    #[error("node does not exist: {id}")]
    UnknownNode { id: String },

    #[error("no edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RutterError {
    /// Create an error for a node id that is already taken
    pub fn duplicate_node(id: impl fmt::Display) -> Self {
        RutterError::DuplicateNode { id: id.to_string() }
    }

    /// Create an error for an edge with a non-positive weight
    pub fn zero_weight(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        RutterError::ZeroWeight {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a node id absent from the graph
    pub fn unknown_node(id: impl fmt::Display) -> Self {
        RutterError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a route step with no connecting edge
    pub fn missing_edge(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        RutterError::MissingEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RutterError::UnknownFormat(_) => ExitCode::Usage,

            RutterError::DuplicateNode { .. }
            | RutterError::ZeroWeight { .. }
            | RutterError::UnknownNode { .. }
            | RutterError::MissingEdge { .. } => ExitCode::Data,

            RutterError::Io(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RutterError::UnknownFormat(_) => "unknown_format",
            RutterError::DuplicateNode { .. } => "duplicate_node",
            RutterError::ZeroWeight { .. } => "zero_weight",
            RutterError::UnknownNode { .. } => "unknown_node",
            RutterError::MissingEdge { .. } => "missing_edge",
            RutterError::Io(_) => "io_error",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for rutter operations
pub type Result<T> = std::result::Result<T, RutterError>;
