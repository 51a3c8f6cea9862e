//! Unified error type for the PetPal client.

use std::fmt;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::server::ServerError;
use super::validation::ValidationError;
use crate::startup::config::ConfigError;

/// Fallback text when nothing better describes the failure.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Unified error type for the PetPal client.
#[derive(Debug, Clone)]
pub enum PetPalError {
    /// The request never reached the service or no response came back.
    Network(NetworkError),

    /// The service answered with a non-success status.
    Server(ServerError),

    /// The action is not possible in the current state.
    Validation(ValidationError),

    /// Invalid configuration.
    Config(ConfigError),

    /// Local I/O failure outside of image loading.
    System { message: String },
}

impl PetPalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PetPalError::Network(_) => ErrorCategory::Network,
            PetPalError::Server(_) => ErrorCategory::Server,
            PetPalError::Validation(_) => ErrorCategory::Validation,
            PetPalError::Config(_) => ErrorCategory::Configuration,
            PetPalError::System { .. } => ErrorCategory::System,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PetPalError::Network(err) => err.error_code(),
            PetPalError::Server(err) => err.error_code(),
            PetPalError::Validation(err) => err.error_code(),
            PetPalError::Config(_) => "E_CONFIG",
            PetPalError::System { .. } => "E_SYSTEM",
        }
    }

    /// Best available message for the user.
    ///
    /// Server-provided detail first, then the error's own description, then
    /// [`UNKNOWN_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let PetPalError::Server(ServerError {
            detail: Some(detail),
            ..
        }) = self
        {
            return detail.clone();
        }
        let generic = self.to_string();
        if generic.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            generic
        }
    }
}

impl fmt::Display for PetPalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetPalError::Network(err) => write!(f, "{}", err),
            PetPalError::Server(err) => write!(f, "{}", err),
            PetPalError::Validation(err) => write!(f, "{}", err),
            PetPalError::Config(err) => write!(f, "{}", err),
            PetPalError::System { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for PetPalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PetPalError::Network(err) => Some(err),
            PetPalError::Server(err) => Some(err),
            PetPalError::Validation(err) => Some(err),
            PetPalError::Config(err) => Some(err),
            PetPalError::System { .. } => None,
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for PetPalError {
    fn from(err: NetworkError) -> Self {
        PetPalError::Network(err)
    }
}

impl From<ServerError> for PetPalError {
    fn from(err: ServerError) -> Self {
        PetPalError::Server(err)
    }
}

impl From<ValidationError> for PetPalError {
    fn from(err: ValidationError) -> Self {
        PetPalError::Validation(err)
    }
}

impl From<ConfigError> for PetPalError {
    fn from(err: ConfigError) -> Self {
        PetPalError::Config(err)
    }
}

impl From<std::io::Error> for PetPalError {
    fn from(err: std::io::Error) -> Self {
        PetPalError::System {
            message: err.to_string(),
        }
    }
}
