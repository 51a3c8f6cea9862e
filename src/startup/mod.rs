//! Startup: configuration, logging, reference data and the health probe.
//!
//! - [`config`] - `PetPalConfig` from defaults, environment and CLI
//! - [`logging`] - file-based tracing subscriber
//! - [`reference_data`] - concurrent startup fetches and their aggregate status
//! - [`health`] - `--health` probe

pub mod config;
pub mod health;
pub mod logging;
pub mod reference_data;

pub use config::{ConfigError, PetPalConfig, DEFAULT_API_URL};
pub use health::run_health_probe;
pub use logging::init_tracing;
pub use reference_data::{
    load_reference_data, ConnectionStatus, FetchOutcome, ReferenceData, StartupStatus,
};
