//! Background itinerary processor
//!
//! Drives one submitted request through its checkpoint schedule to a single
//! terminal state. Spawned fire-and-forget at submission time; the submit
//! caller has already received its response, so every failure here is
//! captured into the job record instead of being propagated. A job must
//! never crash the host process or stay pending forever.

use chrono::NaiveDate;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use wayfarer_core::domain::request::TravelRequest;

use crate::registry::{Registry, RegistryError};
use crate::service::generator::{self, GenerateError};

/// Processor error type
#[derive(Debug)]
pub enum ProcessError {
    Generate(GenerateError),
    Registry(RegistryError),
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::Generate(e) => write!(f, "{}", e),
            ProcessError::Registry(e) => write!(f, "{}", e),
        }
    }
}

impl From<GenerateError> for ProcessError {
    fn from(err: GenerateError) -> Self {
        ProcessError::Generate(err)
    }
}

impl From<RegistryError> for ProcessError {
    fn from(err: RegistryError) -> Self {
        ProcessError::Registry(err)
    }
}

/// Spawns the background task for a freshly created request
///
/// The registry entry must already exist. The returned handle is for tests;
/// production callers drop it (fire-and-forget).
pub fn spawn(
    registry: Registry,
    stage_delay: Duration,
    request_id: Uuid,
    request: TravelRequest,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = process(&registry, stage_delay, request_id, &request, date_from, date_to).await
        {
            error!("Travel request {} failed: {}", request_id, e);
            if let Err(store_err) = registry.fail(request_id, e.to_string()).await {
                // Record vanished or already terminal; nothing left to do
                warn!(
                    "Could not record failure for request {}: {:?}",
                    request_id, store_err
                );
            }
        }
    })
}

/// Advances the request through the fixed checkpoint schedule
///
/// Progress values and stage messages mirror the user-facing generation
/// stages; the inter-stage delay is configuration (near-zero in tests).
async fn process(
    registry: &Registry,
    stage_delay: Duration,
    request_id: Uuid,
    request: &TravelRequest,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<(), ProcessError> {
    debug!(
        "Processing travel request {} for {}",
        request_id, request.location
    );

    registry
        .advance(request_id, 0.2, "Analyzing location and preferences")
        .await?;
    tokio::time::sleep(stage_delay).await;

    registry
        .advance(request_id, 0.4, "Generating itinerary points")
        .await?;
    tokio::time::sleep(stage_delay).await;

    registry
        .advance(request_id, 0.6, "Creating personalized recommendations")
        .await?;

    let itinerary = generator::generate_itinerary(request, date_from, date_to)?;

    tokio::time::sleep(stage_delay).await;

    registry
        .advance(request_id, 0.8, "Finalizing your travel plan")
        .await?;
    tokio::time::sleep(stage_delay / 2).await;

    let point_count = itinerary.len();
    registry.complete(request_id, itinerary).await?;

    info!(
        "Completed travel request {} with {} points",
        request_id, point_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{InMemoryRegistry, RequestStore};
    use std::sync::Arc;
    use wayfarer_core::domain::job::JobStatus;
    use wayfarer_core::domain::request::TravelPreferences;

    fn paris_request() -> TravelRequest {
        TravelRequest {
            location: "Paris".to_string(),
            date_from: "2025-06-01".to_string(),
            date_to: "2025-06-02".to_string(),
            preferences: TravelPreferences::default(),
        }
    }

    #[tokio::test]
    async fn test_process_completes_job() {
        let registry: Registry = Arc::new(InMemoryRegistry::new());
        let id = Uuid::new_v4();
        registry.create(id).await.unwrap();

        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        spawn(registry.clone(), Duration::ZERO, id, paris_request(), from, to)
            .await
            .unwrap();

        let record = registry.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Completed);
        assert_eq!(record.progress, 1.0);
        assert!(record.result.as_ref().is_some_and(|r| !r.is_empty()));
        assert!(record.error.is_none());
    }

    #[tokio::test]
    async fn test_generation_failure_marks_job_failed() {
        let registry: Registry = Arc::new(InMemoryRegistry::new());
        let id = Uuid::new_v4();
        registry.create(id).await.unwrap();

        // Inverted range sneaks past the gateway only in this direct spawn;
        // the processor boundary must still convert it into a terminal failure
        let from = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        spawn(registry.clone(), Duration::ZERO, id, paris_request(), from, to)
            .await
            .unwrap();

        let record = registry.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Failed);
        assert!(record.error.as_ref().is_some_and(|e| e.contains("before")));
        assert!(record.result.is_none());

        // Terminal means frozen: no further checkpoint may land
        let err = registry.advance(id, 0.9, "late").await.unwrap_err();
        assert_eq!(err, RegistryError::TerminalState(id));
    }
}
