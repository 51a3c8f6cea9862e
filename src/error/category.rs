//! Error category classification.
//!
//! Categories drive how an error is presented: which notification title the
//! user sees and whether retrying the same action can help.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request never reached the service or no response came back.
    Network,

    /// The service answered with a non-success status.
    Server,

    /// The user asked for something the current state cannot do.
    /// Not retryable until the user changes the input.
    Validation,

    /// Local OS or filesystem failures.
    System,

    /// Invalid settings (bad base URL, bad env values).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if retrying the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Validation => "validation",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Title used for the blocking error notification.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Connection problem",
            ErrorCategory::Server => "Service error",
            ErrorCategory::Validation => "Cannot do that yet",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Server => "The service may be busy. Please try again",
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::System => "Check the file path and permissions",
            ErrorCategory::Configuration => "Check PETPAL_API_URL and the command-line flags",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
