//! Common test utilities for integration tests.
//!
//! Fixtures mirror what the PetPal service returns, plus helpers for
//! building clients and apps over a mock transport.
//!
//! # Example
//!
//! ```ignore
//! let (mock, app) = app_with_mock();
//! mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(labrador_json()));
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use petpal::adapters::MockHttpClient;
use petpal::api::PetPalClient;
use petpal::app::{App, AppMessage};

/// Base URL used with [`MockHttpClient`].
pub const MOCK_BASE: &str = "http://petpal.test";

/// Full mock URL for an endpoint path.
pub fn url(path: &str) -> String {
    format!("{}{}", MOCK_BASE, path)
}

/// A recipe as the service sends it.
pub fn recipe_json(title: &str) -> Value {
    json!({
        "title": title,
        "tags": ["Grain-Free", "High-Protein"],
        "ingredients": "Salmon, sweet potato, peas",
        "instructions": "Bake the salmon, mash the sweet potato, combine.",
        "nutrition": {
            "calories": 420,
            "protein": "28g",
            "fat": 12.5,
            "carbs": null,
            "micronutrients": "Omega-3, Vitamin A"
        }
    })
}

/// Labrador result with two recipes and 0.92 confidence.
pub fn labrador_json() -> Value {
    json!({
        "breed": "Labrador Retriever",
        "species": "Dog",
        "confidence": 0.92,
        "recipes": [
            recipe_json("Salmon Sweet Potato Mash"),
            recipe_json("Turkey and Pumpkin Bowl")
        ]
    })
}

/// Poodle result with a single recipe.
pub fn poodle_json() -> Value {
    json!({
        "breed": "Poodle",
        "species": "Dog",
        "confidence": 0.81,
        "recipes": [recipe_json("Chicken Rice Bowl")]
    })
}

/// Client over a fresh recording mock.
pub fn mock_client() -> (MockHttpClient, PetPalClient) {
    let mock = MockHttpClient::new();
    let client = PetPalClient::with_http_client(MOCK_BASE, Arc::new(mock.clone()));
    (mock, client)
}

/// App over a fresh recording mock, asking for three recipes per regeneration.
pub fn app_with_mock() -> (MockHttpClient, App) {
    let (mock, client) = mock_client();
    (mock, App::new(client, 3))
}

/// Wait for the next message from a spawned task and apply it.
///
/// Panics if nothing arrives within two seconds.
pub async fn pump_one(app: &mut App) -> AppMessage {
    let rx = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken");
    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("message channel closed");
    app.handle_message(msg.clone());
    msg
}
