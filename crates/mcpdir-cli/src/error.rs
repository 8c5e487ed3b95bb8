//! CLI-specific error types and exit codes.

use mcpdir_api::ApiError;
use mcpdir_core::NavigationError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error not caught by clap (unknown route, bad id).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested server does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The Directory API or the browser could not be reached.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Configuration error (missing or invalid backend root).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidUrl(e) => Self::Config(e.to_string()),
            ApiError::NotFound { resource } => Self::NotFound(resource),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

impl From<NavigationError> for CliError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::MissingUrl { .. } => Self::NotFound(err.to_string()),
            NavigationError::OpenFailed { .. } => Self::Unavailable(err.to_string()),
        }
    }
}
