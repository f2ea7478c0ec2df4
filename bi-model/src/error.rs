//! Error type for talking to the REST backend.
//!
//! Views surface `ApiError`'s `Display` text directly in their error banner,
//! so the messages are written for end users.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when calling the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response. The detail is kept for logs.
    #[error("Error connecting to server")]
    Connection(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The body did not have the expected JSON shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a `Backend` error from a failed response.
    ///
    /// Uses the JSON `message` field when the backend sent one, otherwise the
    /// status text, otherwise the bare status code.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    format!("{} ({})", status_text, status)
                }
            });
        ApiError::Backend { status, message }
    }
}

/// Decode a JSON response body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_uses_generic_message() {
        let err = ApiError::Connection("tcp connect refused".to_string());
        assert_eq!(err.to_string(), "Error connecting to server");
    }

    #[test]
    fn test_backend_message_field_wins() {
        let err = ApiError::from_response(401, "Unauthorized", r#"{"message":"Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Backend {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_status_text_when_body_is_not_json() {
        let err = ApiError::from_response(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(err.to_string(), "Bad Gateway (502)");
        let err = ApiError::from_response(500, "", "");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_decode_reports_shape_errors() {
        let ok: Vec<i32> = decode("[1,2,3]").unwrap();
        assert_eq!(ok, vec![1, 2, 3]);
        let err = decode::<Vec<i32>>("{\"a\":1}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
