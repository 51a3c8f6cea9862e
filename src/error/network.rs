//! Network-related error types.
//!
//! These cover requests that never reached the service, responses that never
//! arrived, and success responses whose body could not be decoded.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out at the transport layer.
    Timeout { url: String },

    /// The URL could not be used for a request.
    InvalidUrl { url: String },

    /// A success response carried a body we could not decode.
    InvalidResponse { message: String },

    /// Generic transport error.
    Other { message: String },
}

impl NetworkError {
    /// Map a transport failure for `url` into a network error.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Could not reach '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response from the service: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest error into an [`HttpError`].
pub fn classify_reqwest_error(err: &reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_connection_failed() {
        let err = NetworkError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://x/health",
        );
        match &err {
            NetworkError::ConnectionFailed { url, message } => {
                assert_eq!(url, "http://x/health");
                assert_eq!(message, "refused");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_from_http_timeout() {
        let err = NetworkError::from_http(HttpError::Timeout("30s".to_string()), "http://x/a");
        assert!(matches!(err, NetworkError::Timeout { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_display_invalid_response() {
        let err = NetworkError::InvalidResponse {
            message: "expected array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid response from the service: expected array"
        );
    }
}
