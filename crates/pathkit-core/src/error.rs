//! Error types and exit codes for pathkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph file, unknown node)

mod macros;

use thiserror::Error;

/// Exit codes used by the pathkit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph definition, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathkit operations
#[derive(Error, Debug)]
pub enum PathkitError {
    // Programmer errors on the container primitives
    #[error("{operation} from empty {container}")]
    EmptyContainer {
        container: &'static str,
        operation: &'static str,
    },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {value}")]
    UnknownNode { value: String },

    #[error("invalid graph definition: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PathkitError {
    /// Create an error for an extraction or peek on an empty container
    pub fn empty_container(container: &'static str, operation: &'static str) -> Self {
        PathkitError::EmptyContainer {
            container,
            operation,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathkitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PathkitError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a graph definition that cannot be built
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        PathkitError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            PathkitError::UnknownFormat(_)
            | PathkitError::UsageError(_)
            | PathkitError::InvalidValue { .. }
            | PathkitError::Unsupported { .. } => ExitCode::Usage,

            // Data errors
            PathkitError::UnknownNode { .. } | PathkitError::InvalidGraph { .. } => {
                ExitCode::Data
            }

            // Generic failures
            PathkitError::EmptyContainer { .. }
            | PathkitError::Io(_)
            | PathkitError::Toml(_)
            | PathkitError::TomlSer(_)
            | PathkitError::Json(_)
            | PathkitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathkitError::EmptyContainer { .. } => "empty_container",
            PathkitError::UnknownFormat(_) => "unknown_format",
            PathkitError::UsageError(_) => "usage_error",
            PathkitError::InvalidValue { .. } => "invalid_value",
            PathkitError::Unsupported { .. } => "unsupported",
            PathkitError::UnknownNode { .. } => "unknown_node",
            PathkitError::InvalidGraph { .. } => "invalid_graph",
            PathkitError::Io(_) => "io_error",
            PathkitError::Toml(_) => "toml_error",
            PathkitError::TomlSer(_) => "toml_error",
            PathkitError::Json(_) => "json_error",
            PathkitError::Other(_) => "other",
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

/// Result type alias for pathkit operations
pub type Result<T> = std::result::Result<T, PathkitError>;
