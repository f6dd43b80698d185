//! Wayfarer HTTP Client
//!
//! A simple, type-safe HTTP client for the Wayfarer travel request API,
//! plus the polling loop that waits for a submitted request to finish.
//!
//! # Example
//!
//! ```no_run
//! use wayfarer_client::{PlannerClient, PollConfig};
//! use wayfarer_core::domain::request::{TravelPreferences, TravelRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PlannerClient::new("http://localhost:8080");
//!
//!     let receipt = client.submit_travel_request(&TravelRequest {
//!         location: "Paris".to_string(),
//!         date_from: "2025-06-01".to_string(),
//!         date_to: "2025-06-02".to_string(),
//!         preferences: TravelPreferences::default(),
//!     }).await?;
//!
//!     let itinerary = wayfarer_client::poll_until_complete(
//!         &client,
//!         receipt.request_id,
//!         &PollConfig::default(),
//!     ).await?;
//!
//!     println!("Got {} itinerary points", itinerary.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod poller;
mod travel;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{PollConfig, StatusSource, poll_until_complete, poll_with_observer};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Wayfarer server API
///
/// Provides methods for the travel request lifecycle: submit, status
/// polling and result retrieval.
#[derive(Debug, Clone)]
pub struct PlannerClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PlannerClient {
    /// Create a new planner client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new planner client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
