//! Core domain types
//!
//! This module contains the core domain structures used across Wayfarer
//! services. These types represent the fundamental business entities and are
//! shared between the server (which tracks jobs) and the client (which
//! submits and polls them).

pub mod itinerary;
pub mod job;
pub mod request;
