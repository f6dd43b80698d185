//! Itinerary domain types

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in floating-point degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Well-known itinerary point categories
///
/// The `type` field on [`ItineraryPoint`] is an open string enum: the server
/// emits these values, but consumers must tolerate unknown ones.
pub mod point_type {
    pub const START: &str = "start";
    pub const ATTRACTION: &str = "attraction";
    pub const FOOD: &str = "food";
    pub const ACCOMMODATION: &str = "accommodation";
}

/// One scheduled stop in a generated itinerary
///
/// Times are canonical UTC timestamps serialized as RFC 3339; the server
/// standardizes at the generation boundary so downstream consumers never
/// have to parse ambiguous string shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub time: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub location: String,
    pub coordinates: Coordinates,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attraction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
}
