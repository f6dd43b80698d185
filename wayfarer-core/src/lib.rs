//! Wayfarer Core
//!
//! Core types and abstractions for the Wayfarer trip-planning system.
//!
//! This crate contains:
//! - Domain types: Core business entities (TravelRequest, JobRecord, ItineraryPoint)
//! - DTOs: Data transfer objects exchanged between server, client and CLI

pub mod domain;
pub mod dto;
