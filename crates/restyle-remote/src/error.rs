//! Failure kinds of a remote layout request

use thiserror::Error;

/// Why a remote layout request produced no candidate document.
///
/// None of these reach the user: the pipeline logs them and leaves the style
/// state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Connection, TLS, or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope did not carry a message content string.
    #[error("unexpected response body: {body}")]
    Decode { body: String },
}

impl RemoteError {
    /// Short label for logs and engine events.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Network(_) => "network",
            RemoteError::Status { .. } => "status",
            RemoteError::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Network(format!("request timed out: {err}"))
        } else {
            RemoteError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(RemoteError::Network("refused".into()).kind(), "network");
        assert_eq!(
            RemoteError::Status {
                status: 401,
                body: String::new()
            }
            .kind(),
            "status"
        );
        assert_eq!(RemoteError::Decode { body: "{}".into() }.kind(), "decode");
    }

    #[test]
    fn test_decode_error_carries_raw_body() {
        let err = RemoteError::Decode {
            body: r#"{"choices":[]}"#.into(),
        };
        assert!(err.to_string().contains(r#"{"choices":[]}"#));
    }
}
