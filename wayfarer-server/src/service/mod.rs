//! Service Module
//!
//! Business logic layer for the server.
//! The travel service is the public gateway (submit/status/result); the
//! processor drives each request through its background lifecycle; the
//! generator produces the itinerary content.

pub mod generator;
pub mod processor;
pub mod travel;

// Re-export for convenience
pub use travel as travel_service;
