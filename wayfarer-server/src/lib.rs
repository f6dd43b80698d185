//! Wayfarer Server
//!
//! HTTP service that accepts travel requests, generates itineraries in the
//! background, and lets clients poll for progress and results.
//!
//! Layers:
//! - `api`: axum handlers and error mapping
//! - `service`: request gateway, background processor, itinerary generator
//! - `registry`: in-memory job store, the sole source of truth for status

pub mod api;
pub mod config;
pub mod registry;
pub mod service;
