//! `--health`: probe the inference service for external monitoring.

use tracing::{info, warn};

use crate::api::PetPalClient;
use crate::startup::run_health_probe;

/// Run the probe and print the result. Returns `false` when the service is
/// unreachable or unhealthy, which the binary turns into exit code 1.
pub async fn handle_health_command(client: &PetPalClient) -> bool {
    match run_health_probe(client).await {
        Ok(payload) => {
            info!(base_url = client.base_url(), "health probe succeeded");
            println!("{}", payload);
            true
        }
        Err(err) => {
            warn!(code = err.error_code(), "health probe failed: {}", err);
            eprintln!("Health check failed: {}", err.user_message());
            false
        }
    }
}
