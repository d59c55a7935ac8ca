//! Error types for backend communication.
//!
//! - [`FetchError`] - Network, HTTP and decoding errors for index requests

use thiserror::Error;

/// Network/fetch-related errors for index requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response without a readable error body
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Backend rejected the request with an error message
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// Search attempted without query text
    #[error("Please enter a search query")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::HttpError(500).to_string(), "HTTP error: 500");
        assert_eq!(
            FetchError::Api {
                status: 404,
                message: "/x is not found in index".to_string()
            }
            .to_string(),
            "/x is not found in index (HTTP 404)"
        );
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}
