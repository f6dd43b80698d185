//! Travel request API endpoints

use crate::PlannerClient;
use crate::error::Result;
use uuid::Uuid;
use wayfarer_core::domain::itinerary::ItineraryPoint;
use wayfarer_core::domain::request::TravelRequest;
use wayfarer_core::dto::travel::{ItineraryResult, StatusSnapshot, SubmitReceipt};

impl PlannerClient {
    /// Submit a travel request for background itinerary generation
    ///
    /// Returns immediately with a request id; use
    /// [`travel_status`](Self::travel_status) or the polling helpers to
    /// follow progress.
    pub async fn submit_travel_request(&self, request: &TravelRequest) -> Result<SubmitReceipt> {
        let url = format!("{}/travel/request", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Check the status of a submitted travel request
    ///
    /// Unknown ids yield a failure-shaped snapshot, not an HTTP error.
    pub async fn travel_status(&self, request_id: Uuid) -> Result<StatusSnapshot> {
        let url = format!("{}/travel/status/{}", self.base_url, request_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the itinerary of a completed travel request
    ///
    /// Fails unless the request has completed successfully.
    pub async fn travel_result(&self, request_id: Uuid) -> Result<Vec<ItineraryPoint>> {
        let url = format!("{}/travel/result/{}", self.base_url, request_id);
        let response = self.client.get(&url).send().await?;

        let result: ItineraryResult = self.handle_response(response).await?;
        Ok(result.itinerary)
    }
}
