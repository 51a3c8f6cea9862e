//! Non-interactive health probe for `petpal --health`.

use crate::api::PetPalClient;
use crate::error::PetPalResult;

/// Probe `GET /health` and return the payload pretty-printed.
pub async fn run_health_probe(client: &PetPalClient) -> PetPalResult<String> {
    tracing::info!(base_url = client.base_url(), "running health probe");
    let payload = client.health_check().await?;
    Ok(serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string()))
}
