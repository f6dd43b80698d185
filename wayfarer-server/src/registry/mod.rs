//! Request Registry
//!
//! Key -> JobRecord store tracking every submitted travel request for the
//! lifetime of the process. The store sits behind the [`RequestStore`] trait
//! so the backend (in-memory map, external cache, database) is swappable
//! without touching the processor or gateway.

pub mod memory;

pub use memory::InMemoryRegistry;

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use wayfarer_core::domain::itinerary::ItineraryPoint;
use wayfarer_core::domain::job::JobRecord;

/// Registry error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    NotFound(Uuid),
    /// Id collision at create; caller generates unique ids, so this is a
    /// programming error rather than a user-facing one
    AlreadyExists(Uuid),
    /// Attempted mutation of a record that already reached a terminal state
    TerminalState(Uuid),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound(id) => write!(f, "request {} not found", id),
            RegistryError::AlreadyExists(id) => write!(f, "request {} already exists", id),
            RegistryError::TerminalState(id) => {
                write!(f, "request {} is already in a terminal state", id)
            }
        }
    }
}

/// Store for travel request job records
///
/// Each record is a single-writer resource: only the processor task that
/// owns a request id mutates it after creation. Implementations must make
/// every read-modify-write atomic and hand out consistent snapshots.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Inserts a new pending record
    async fn create(&self, id: Uuid) -> Result<(), RegistryError>;

    /// Records a progress checkpoint on a pending record
    async fn advance(&self, id: Uuid, progress: f64, message: &str) -> Result<(), RegistryError>;

    /// Terminal transition: attach the generated itinerary
    async fn complete(&self, id: Uuid, result: Vec<ItineraryPoint>) -> Result<(), RegistryError>;

    /// Terminal transition: record the failure reason
    async fn fail(&self, id: Uuid, error: String) -> Result<(), RegistryError>;

    /// Consistent snapshot of a record, if tracked
    async fn get(&self, id: Uuid) -> Option<JobRecord>;
}

/// Shared handle to the process-wide registry
pub type Registry = Arc<dyn RequestStore>;
