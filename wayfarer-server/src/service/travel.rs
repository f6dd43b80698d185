//! Travel Service
//!
//! The request gateway: the three public operations of the lifecycle
//! manager. `submit` validates and registers a job, then launches the
//! background processor without blocking; `status` and `result` read the
//! registry.

use chrono::NaiveDate;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use wayfarer_core::domain::job::JobStatus;
use wayfarer_core::domain::request::{TravelRequest, parse_trip_date};
use wayfarer_core::dto::travel::{ItineraryResult, StatusSnapshot, SubmitReceipt};

use crate::registry::{Registry, RegistryError};
use crate::service::processor;

/// Service error type
#[derive(Debug)]
pub enum TravelError {
    /// Malformed or missing submission fields; the job is never created
    ValidationError(String),
    /// `result` called for a job that is not completed (covers pending,
    /// failed and unknown ids uniformly)
    InvalidState(String),
    /// Registry misuse, e.g. an id collision
    InternalError(String),
}

impl From<RegistryError> for TravelError {
    fn from(err: RegistryError) -> Self {
        TravelError::InternalError(err.to_string())
    }
}

/// Create a job for a travel request and launch background processing
///
/// Returns as soon as the job is registered; generation happens on a
/// spawned task and is only observable through `status`/`result`.
pub async fn submit(
    registry: &Registry,
    stage_delay: Duration,
    request: TravelRequest,
) -> Result<SubmitReceipt, TravelError> {
    let (date_from, date_to) = validate(&request)?;

    let request_id = Uuid::new_v4();
    registry.create(request_id).await?;

    info!(
        "Travel request {} registered for {} ({} to {})",
        request_id, request.location, request.date_from, request.date_to
    );

    let _handle = processor::spawn(
        registry.clone(),
        stage_delay,
        request_id,
        request,
        date_from,
        date_to,
    );

    // The caller always sees "pending", even if the processor races ahead
    Ok(SubmitReceipt {
        request_id,
        status: JobStatus::Pending,
    })
}

/// Snapshot of a job's status
///
/// Unknown ids yield a synthetic failed snapshot rather than an error, so
/// pollers always get a well-formed terminal answer.
pub async fn status(registry: &Registry, request_id: Uuid) -> StatusSnapshot {
    match registry.get(request_id).await {
        Some(record) => StatusSnapshot::from_record(request_id, &record),
        None => StatusSnapshot::not_found(request_id),
    }
}

/// Final itinerary of a completed job
///
/// Fails with `InvalidState` unless the job is completed; the stored result
/// is returned unmodified, so repeated calls are byte-for-byte identical.
pub async fn result(registry: &Registry, request_id: Uuid) -> Result<ItineraryResult, TravelError> {
    let record = registry.get(request_id).await.ok_or_else(|| {
        TravelError::InvalidState(format!("Request {} not completed or not found", request_id))
    })?;

    match record.result {
        Some(itinerary) => Ok(ItineraryResult { itinerary }),
        None => Err(TravelError::InvalidState(format!(
            "Request {} is {} and has no result",
            request_id, record.status
        ))),
    }
}

/// Validates a submission and parses the trip boundaries
///
/// `date_to` before `date_from` is rejected here; the background processor
/// never sees a degenerate range from this path.
fn validate(request: &TravelRequest) -> Result<(NaiveDate, NaiveDate), TravelError> {
    if request.location.trim().is_empty() {
        return Err(TravelError::ValidationError(
            "Missing required field: location".to_string(),
        ));
    }

    let date_from = parse_trip_date(&request.date_from).ok_or_else(|| {
        TravelError::ValidationError(format!("Invalid date_from: {:?}", request.date_from))
    })?;
    let date_to = parse_trip_date(&request.date_to).ok_or_else(|| {
        TravelError::ValidationError(format!("Invalid date_to: {:?}", request.date_to))
    })?;

    if date_to < date_from {
        return Err(TravelError::ValidationError(format!(
            "date_to {} is before date_from {}",
            date_to, date_from
        )));
    }

    Ok((date_from, date_to))
}
