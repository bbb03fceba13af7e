//! Error types for the Enloe client

use enloe_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Enloe client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the backend
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Expected row was not returned
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// No access token is held
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Rejected client-side before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Local file access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a raw error body
    ///
    /// The backend answers failures with a JSON object carrying `message`
    /// and/or `error`; anything else is kept as plain text.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| {
                let text = body.trim();
                if text.is_empty() {
                    "Unknown error".to_string()
                } else {
                    text.to_string()
                }
            });

        Self::api_error(status, message)
    }

    /// The string shown to the user for this failure
    ///
    /// Backend errors surface the backend's own message unchanged.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::Validation(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if the backend rejected the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated) || matches!(self, Self::ApiError { status: 401, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_prefers_message() {
        let err = ClientError::from_body(
            400,
            r#"{"error":"INVALID_INPUT","message":"Email already registered","statusCode":400}"#,
        );
        assert_eq!(err.user_message(), "Email already registered");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_from_body_error_field() {
        let err = ClientError::from_body(401, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_from_body_plain_text_and_empty() {
        assert_eq!(
            ClientError::from_body(502, "Bad Gateway").user_message(),
            "Bad Gateway"
        );
        let err = ClientError::from_body(500, "  ");
        assert_eq!(err.user_message(), "Unknown error");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ClientError::from(ValidationError::FileTooLarge);
        assert_eq!(err.user_message(), "File size must be less than 5MB");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_not_found() {
        assert!(ClientError::NotFound("servers".into()).is_not_found());
        assert!(ClientError::api_error(404, "gone").is_not_found());
    }
}
