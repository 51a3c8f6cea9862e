//! Startup reference data: dietary vocabulary and popular breeds.
//!
//! Both fetches run concurrently. Each outcome is kept separately so a
//! successful half is still applied when the other fails.

use crate::api::PetPalClient;
use crate::error::PetPalResult;
use crate::models::PopularBreeds;

/// Result of one startup fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn from_result(result: PetPalResult<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Loaded(value),
            Err(err) => FetchOutcome::Failed(err.user_message()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn into_loaded(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Loaded(_) => None,
            FetchOutcome::Failed(message) => Some(message),
        }
    }
}

/// Overall connectivity derived from the startup fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Still waiting for the startup fetches
    Connecting,
    /// Every fetch succeeded
    Connected,
    /// Some fetches failed
    Degraded,
    /// Every fetch failed
    Failed,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting to API...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Degraded => "Some reference data could not be loaded",
            ConnectionStatus::Failed => "API connection failed",
        }
    }
}

/// Aggregated startup state shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupStatus {
    pub connection: ConnectionStatus,
    /// Human-readable failure per fetch, `"<what>: <why>"`
    pub failures: Vec<String>,
}

impl StartupStatus {
    pub fn connecting() -> Self {
        Self {
            connection: ConnectionStatus::Connecting,
            failures: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.connection == ConnectionStatus::Failed
    }
}

impl Default for StartupStatus {
    fn default() -> Self {
        Self::connecting()
    }
}

/// Both startup fetches, each with its own outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub dietary_options: FetchOutcome<Vec<String>>,
    pub popular_breeds: FetchOutcome<PopularBreeds>,
}

impl ReferenceData {
    pub fn status(&self) -> StartupStatus {
        let mut failures = Vec::new();
        if let Some(why) = self.dietary_options.failure() {
            failures.push(format!("dietary options: {}", why));
        }
        if let Some(why) = self.popular_breeds.failure() {
            failures.push(format!("popular breeds: {}", why));
        }

        let connection = match failures.len() {
            0 => ConnectionStatus::Connected,
            2 => ConnectionStatus::Failed,
            _ => ConnectionStatus::Degraded,
        };
        StartupStatus {
            connection,
            failures,
        }
    }
}

/// Fetch dietary options and popular breeds concurrently.
pub async fn load_reference_data(client: &PetPalClient) -> ReferenceData {
    let (dietary, popular) = tokio::join!(client.get_dietary_options(), client.get_popular_breeds());

    let data = ReferenceData {
        dietary_options: FetchOutcome::from_result(dietary),
        popular_breeds: FetchOutcome::from_result(popular),
    };

    let status = data.status();
    match status.connection {
        ConnectionStatus::Connected => tracing::info!("reference data loaded"),
        _ => tracing::warn!(failures = ?status.failures, "reference data incomplete"),
    }
    data
}
