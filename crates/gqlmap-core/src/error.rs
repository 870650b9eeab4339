//! Centralized error types for schema loading and analysis.

use thiserror::Error;

/// Main error type for core schema operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Operation not found: {root}.{name}")]
    OperationNotFound { root: String, name: String },

    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Document is not an introspection response: {0}")]
    SchemaShape(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core schema operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a shape error for a malformed document.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::SchemaShape(msg.into())
    }
}
