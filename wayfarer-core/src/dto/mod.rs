//! Data Transfer Objects for the travel request API
//!
//! This module contains the wire shapes exchanged between the Wayfarer
//! server and its clients. DTOs are lightweight representations of domain
//! entities optimized for network transfer.

pub mod travel;
