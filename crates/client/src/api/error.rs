//! Error types for the ordering API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the ordering backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL parses but cannot prefix request paths (it carries a
    /// query or fragment, or has no hierarchical path).
    #[error("unusable base URL {url}: {reason}")]
    UnusableBaseUrl {
        /// The rejected URL.
        url: String,
        /// What makes it unusable.
        reason: &'static str,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the credential (401 or 403).
    #[error("unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The requested resource does not exist (404).
    #[error("not found: {message}")]
    NotFound {
        /// Response body.
        message: String,
    },

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },
}

impl ApiError {
    /// Classify a non-success response.
    #[must_use]
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized {
                status: status.as_u16(),
                message,
            },
            StatusCode::NOT_FOUND => Self::NotFound { message },
            _ => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The HTTP status code, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::InvalidUrl(_)
            | Self::UnusableBaseUrl { .. }
            | Self::Transport(_)
            | Self::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_auth_failures() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "token expired".to_string());
        assert!(matches!(err, ApiError::Unauthorized { status: 401, .. }));

        let err = ApiError::from_status(StatusCode::FORBIDDEN, "admin only".to_string());
        assert!(matches!(err, ApiError::Unauthorized { status: 403, .. }));
    }

    #[test]
    fn test_from_status_not_found_and_other() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "no such order".to_string());
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.status(), Some(404));

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }
}
