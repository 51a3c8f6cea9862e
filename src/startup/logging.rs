//! File-based tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::PetPalConfig;

/// Install the global tracing subscriber.
///
/// Returns false when logging could not be set up (no log path, unwritable
/// directory, or a subscriber was already installed). Never fatal.
pub fn init_tracing(config: &PetPalConfig) -> bool {
    let Some(path) = config.log_file.as_deref() else {
        return false;
    };
    match open_log_file(path) {
        Ok(file) => {
            let filter = EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .is_ok()
        }
        Err(_) => false,
    }
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
