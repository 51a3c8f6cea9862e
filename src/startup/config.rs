//! Startup configuration.
//!
//! Settings come from defaults, then environment variables, then CLI
//! overrides, in that order.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::DEFAULT_RECIPE_COUNT;

/// Hosted PetPal service.
pub const DEFAULT_API_URL: &str = "https://priaansh-petpal.hf.space";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_API_URL: &str = "PETPAL_API_URL";
pub const ENV_RECIPE_COUNT: &str = "PETPAL_RECIPE_COUNT";
pub const ENV_LOG: &str = "PETPAL_LOG";

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Base URL is not an absolute http(s) URL
    #[error("Invalid API URL '{0}': expected an http:// or https:// URL")]
    InvalidApiUrl(String),

    /// Recipe count is not a positive integer
    #[error("Invalid recipe count '{0}': expected a positive integer")]
    InvalidRecipeCount(String),
}

/// Runtime configuration for the client.
///
/// ```ignore
/// use petpal::startup::PetPalConfig;
///
/// let config = PetPalConfig::default()
///     .with_api_base_url("http://localhost:7860")?
///     .with_recipe_count(5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PetPalConfig {
    /// Base URL of the inference service, without trailing slash
    pub api_base_url: String,
    /// Number of recipes to ask for when generating more
    pub recipe_count: u32,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
    /// Log file location (None disables file logging)
    pub log_file: Option<PathBuf>,
}

impl Default for PetPalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            recipe_count: DEFAULT_RECIPE_COUNT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl PetPalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL after validating it.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }

    pub fn with_recipe_count(mut self, count: u32) -> Self {
        self.recipe_count = count.max(1);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Build configuration from `PETPAL_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(&url)?;
        }
        if let Some(count) = get(ENV_RECIPE_COUNT) {
            config = config.with_recipe_count(parse_recipe_count(&count)?);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter.trim());
        }
        Ok(config)
    }

    /// Full URL for an endpoint path such as `/health`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

/// Validate scheme and strip trailing slashes.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match rest {
        Some(host) if !host.trim_end_matches('/').is_empty() => {
            Ok(trimmed.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidApiUrl(url.to_string())),
    }
}

fn parse_recipe_count(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidRecipeCount(value.to_string())),
    }
}

/// `<data dir>/petpal/petpal.log`, when the platform has a data dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("petpal").join("petpal.log"))
}
