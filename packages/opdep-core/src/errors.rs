//! Error types for opdep-core
//!
//! The builder has no recoverable failure modes under well-formed input.
//! Everything here is either a caller contract violation or a configuration
//! problem, and is reported before any partial graph escapes.

use crate::config::ConfigError;
use crate::shared::models::OperationId;
use thiserror::Error;

/// Main error type for dependency graph construction
#[derive(Debug, Error)]
pub enum DependencyGraphError {
    /// A block lists an operation handle the arena does not contain
    #[error("Block {block} of '{function_id}' references unknown operation {operation}")]
    UnknownOperation {
        function_id: String,
        block: usize,
        operation: OperationId,
    },

    /// A block lists an operation handle already seen earlier in the pass
    #[error("Block {block} of '{function_id}' repeats operation {operation}")]
    DuplicateOperation {
        function_id: String,
        block: usize,
        operation: OperationId,
    },

    /// The body has more distinct operations than the configured limit
    #[error("'{function_id}' exceeds the node limit of {limit} operations")]
    NodeLimitExceeded { function_id: String, limit: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DependencyGraphError {
    pub fn unknown_operation(
        function_id: impl Into<String>,
        block: usize,
        operation: OperationId,
    ) -> Self {
        DependencyGraphError::UnknownOperation {
            function_id: function_id.into(),
            block,
            operation,
        }
    }

    pub fn duplicate_operation(
        function_id: impl Into<String>,
        block: usize,
        operation: OperationId,
    ) -> Self {
        DependencyGraphError::DuplicateOperation {
            function_id: function_id.into(),
            block,
            operation,
        }
    }
}

/// Result type alias for dependency graph operations
pub type Result<T> = std::result::Result<T, DependencyGraphError>;
