//! Travel API Handlers
//!
//! HTTP endpoints for the travel request lifecycle.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use wayfarer_core::domain::request::TravelRequest;
use wayfarer_core::dto::travel::{ItineraryResult, StatusSnapshot, SubmitReceipt};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::travel_service;
use crate::service::travel_service::TravelError;

/// POST /travel/request
/// Submit a travel request; returns immediately with a pending job id
pub async fn submit_travel_request(
    State(state): State<AppState>,
    Json(request): Json<TravelRequest>,
) -> ApiResult<Json<SubmitReceipt>> {
    tracing::info!("Submitting travel request for: {}", request.location);

    let receipt = travel_service::submit(&state.registry, state.config.stage_delay, request)
        .await
        .map_err(map_travel_error)?;

    Ok(Json(receipt))
}

/// GET /travel/status/{request_id}
/// Poll the status of a travel request
///
/// Unknown ids get a failure-shaped body rather than a 404, matching what
/// polling clients expect.
pub async fn get_travel_status(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Json<StatusSnapshot> {
    tracing::debug!("Checking status for travel request: {}", request_id);

    Json(travel_service::status(&state.registry, request_id).await)
}

/// GET /travel/result/{request_id}
/// Fetch the final itinerary of a completed travel request
pub async fn get_travel_result(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> ApiResult<Json<ItineraryResult>> {
    tracing::debug!("Fetching result for travel request: {}", request_id);

    let result = travel_service::result(&state.registry, request_id)
        .await
        .map_err(map_travel_error)?;

    Ok(Json(result))
}

fn map_travel_error(err: TravelError) -> ApiError {
    match err {
        TravelError::ValidationError(msg) => ApiError::BadRequest(msg),
        TravelError::InvalidState(msg) => ApiError::Conflict(msg),
        TravelError::InternalError(msg) => ApiError::InternalError(msg),
    }
}
