//! Gateway Errors

use serde::Deserialize;
use thiserror::Error;

/// The one error kind surfaced to views: the server rejected the request
/// and explained why
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Request(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Request(msg) => msg,
        }
    }
}

/// Failure below the HTTP layer; never leaves the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request did not reach the server: {0}")]
    Unreachable(String),
    #[error("response body could not be read: {0}")]
    Body(String),
}

/// Structured error payload: `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server message from an error response body, if structured
pub(crate) fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extracted() {
        assert_eq!(
            server_message(r#"{"error":"Task not found"}"#),
            Some("Task not found".to_string())
        );
    }

    #[test]
    fn test_unstructured_bodies_have_no_message() {
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
        assert_eq!(server_message(r#"{"errors":[{"msg":"x"}]}"#), None);
    }

    #[test]
    fn test_error_displays_server_message() {
        let err = ApiError::Request("Invalid action".into());
        assert_eq!(err.to_string(), "Invalid action");
        assert_eq!(err.message(), "Invalid action");
    }
}
