//! Error types for kingraph-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::graph_builder::GraphBuilderError;
use crate::features::record_loader::ReferenceIssue;

/// Main error type for kingraph operations
#[derive(Debug, Error)]
pub enum KinshipError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Graph derivation error (precondition violated)
    #[error("Graph build error: {0}")]
    Graph(#[from] GraphBuilderError),

    /// Reference validation error (strict loader mode)
    #[error("Validation error: {0}")]
    Validation(ReferenceIssue),
}

impl KinshipError {
    /// Create a validation error from a rejected reference
    pub fn validation(issue: ReferenceIssue) -> Self {
        KinshipError::Validation(issue)
    }
}

/// Result type alias for kingraph operations
pub type Result<T> = std::result::Result<T, KinshipError>;
