//! Configuration from `PETPAL_*` environment variables.
//!
//! These mutate the process environment, so they run serially.

use petpal::cli::{parse_args, CliCommand};
use petpal::startup::config::{ENV_API_URL, ENV_LOG, ENV_RECIPE_COUNT};
use petpal::startup::{ConfigError, PetPalConfig, DEFAULT_API_URL};
use serial_test::serial;

/// Clears the PetPal variables on creation and again on drop.
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        clear();
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for key in [ENV_API_URL, ENV_RECIPE_COUNT, ENV_LOG] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    let _guard = EnvGuard::new();

    let config = PetPalConfig::from_env().unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.recipe_count, 3);
    assert_eq!(config.log_filter, "info");
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _guard = EnvGuard::new();
    std::env::set_var(ENV_API_URL, "http://localhost:7860/");
    std::env::set_var(ENV_RECIPE_COUNT, "5");
    std::env::set_var(ENV_LOG, "petpal=debug");

    let config = PetPalConfig::from_env().unwrap();
    assert_eq!(config.api_base_url, "http://localhost:7860");
    assert_eq!(config.recipe_count, 5);
    assert_eq!(config.log_filter, "petpal=debug");
    assert_eq!(config.endpoint("/health"), "http://localhost:7860/health");
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_values() {
    let _guard = EnvGuard::new();

    std::env::set_var(ENV_API_URL, "localhost:7860");
    assert_eq!(
        PetPalConfig::from_env(),
        Err(ConfigError::InvalidApiUrl("localhost:7860".to_string()))
    );

    std::env::remove_var(ENV_API_URL);
    std::env::set_var(ENV_RECIPE_COUNT, "0");
    assert_eq!(
        PetPalConfig::from_env(),
        Err(ConfigError::InvalidRecipeCount("0".to_string()))
    );
}

#[test]
#[serial]
fn test_cli_url_overrides_env() {
    let _guard = EnvGuard::new();
    std::env::set_var(ENV_API_URL, "http://from-env:8000");

    let argv = ["petpal", "--api-url", "https://from-cli.example/"];
    let args = parse_args(argv.iter().map(|s| s.to_string())).unwrap();
    assert_eq!(args.command, CliCommand::RunTui);

    let mut config = PetPalConfig::from_env().unwrap();
    if let Some(url) = args.api_url.as_deref() {
        config = config.with_api_base_url(url).unwrap();
    }
    assert_eq!(config.api_base_url, "https://from-cli.example");
}
