use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for backend calls: transport trouble, a non-2xx response
/// (with the server's message when it sent one), or a body we couldn't read.
/// "Resource not configured" 404s never reach callers; the client maps them
/// to empty values before they do.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// Build the typed error for a non-2xx response. Prefers the server's
    /// `message` field, falls back to the calling operation's message.
    pub(crate) fn from_response_parts(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        let err = ApiError::from_response_parts(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid credentials"}"#,
            "Login failed",
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn falls_back_to_operation_message() {
        for body in ["", "oops", r#"{"error": "nope"}"#, r#"{"message": ""}"#] {
            let err = ApiError::from_response_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                body,
                "Failed to fetch trades",
            );
            assert_eq!(err.to_string(), "Failed to fetch trades");
        }
    }

    #[test]
    fn not_found_detection() {
        let err = ApiError::from_response_parts(StatusCode::NOT_FOUND, "", "x");
        assert!(err.is_not_found());
        let err = ApiError::from_response_parts(StatusCode::BAD_GATEWAY, "", "x");
        assert!(!err.is_not_found());
    }
}
