//! Error types for Directory API port operations.

use thiserror::Error;

/// Errors from Directory API port operations.
///
/// These are domain-level errors. Transport-specific errors (HTTP, JSON)
/// are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum DirectoryPortError {
    /// The requested resource does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// What was requested (path or identifier)
        resource: String,
    },

    /// Network or connectivity error, or an unexpected HTTP status.
    #[error("Network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
    },

    /// The API answered with a body the client could not decode.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl DirectoryPortError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for Directory API port operations.
pub type DirectoryPortResult<T> = Result<T, DirectoryPortError>;
