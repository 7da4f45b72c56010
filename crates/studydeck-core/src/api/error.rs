use thiserror::Error;

/// Shown whenever the server gives us nothing better to say.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("{0} not found")]
    NotFound(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// The single human-readable message the UI shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::NotFound(what) => format!("{what} not found"),
            ApiError::InvalidInput(message) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// The bearer token was missing, expired or rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        ApiError::Status {
            status,
            message: server_message(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Pull the server-supplied message out of an error body.
///
/// The backend reports failures as `{"error": "..."}`; some routes use
/// `{"message": "..."}` or nest `{"error": {"message": "..."}}`.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let candidates = [
        value.get("error").and_then(|v| v.as_str()),
        value
            .get("error")
            .and_then(|v| v.get("message"))
            .and_then(|v| v.as_str()),
        value.get("message").and_then(|v| v.as_str()),
    ];
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_error_field() {
        let body = br#"{"error": "Quiz already attempted", "message": "ignored"}"#;
        assert_eq!(
            server_message(body).as_deref(),
            Some("Quiz already attempted")
        );
    }

    #[test]
    fn falls_back_to_nested_then_message_field() {
        assert_eq!(
            server_message(br#"{"error": {"message": "Token expired"}}"#).as_deref(),
            Some("Token expired")
        );
        assert_eq!(
            server_message(br#"{"success": false, "message": "Bad input"}"#).as_deref(),
            Some("Bad input")
        );
    }

    #[test]
    fn non_json_or_blank_bodies_have_no_message() {
        assert_eq!(server_message(b"<html>502</html>"), None);
        assert_eq!(server_message(br#"{"error": "  "}"#), None);
    }

    #[test]
    fn user_message_uses_server_text_or_generic_fallback() {
        let with_message = ApiError::from_status(400, br#"{"error": "Invalid answers"}"#);
        assert_eq!(with_message.user_message(), "Invalid answers");

        let without = ApiError::from_status(500, b"");
        assert_eq!(without.user_message(), GENERIC_ERROR_MESSAGE);
        assert!(!without.is_unauthorized());
        assert!(ApiError::from_status(401, b"").is_unauthorized());
        assert_eq!(ApiError::Timeout.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::NotFound("Quiz".to_string()).user_message(),
            "Quiz not found"
        );
    }
}
