//! Errors reported by the inference service itself.

use std::fmt;

/// Non-success HTTP status returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: u16,
    /// The service's own explanation, when the error body carried one.
    pub detail: Option<String>,
}

impl ServerError {
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Build from a raw error response body.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        Self::new(status, extract_detail(body))
    }

    pub fn error_code(&self) -> &'static str {
        match self.status {
            400..=499 => "E_SRV_CLIENT",
            _ => "E_SRV_INTERNAL",
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "Server error ({}): {}", self.status, detail),
            None => write!(f, "Server error ({})", self.status),
        }
    }
}

impl std::error::Error for ServerError {}

/// Pull the `detail` field out of a JSON error body.
///
/// Handles `{"detail": "..."}` as well as FastAPI validation bodies where
/// `detail` is a list of `{"msg": "..."}` objects (first message wins).
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(|msg| msg.as_str())
            .map(str::to_string)?,
        _ => return None,
    };
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
