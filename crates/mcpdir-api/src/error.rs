//! Internal error types for Directory API operations.
//!
//! These errors are internal to `mcpdir-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for Directory API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to Directory API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Directory API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The API answered 404 for the requested resource.
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Path of the missing resource
        resource: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Directory API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ApiError::ApiRequestFailed {
            status: 503,
            url: "http://localhost:8001/api/servers".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/api/servers"));
    }

    #[test]
    fn test_not_found_error_message() {
        let error = ApiError::NotFound {
            resource: "/api/servers/missing".to_string(),
        };
        assert!(error.to_string().contains("/api/servers/missing"));
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: ApiError = err.into();
        assert!(matches!(error, ApiError::JsonParse(_)));
    }
}
