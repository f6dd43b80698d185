//! In-memory request registry
//!
//! The reference backend: a process-lifetime map guarded by a read/write
//! lock. Records are never evicted, so memory grows with the number of
//! submitted requests; acceptable for this service's lifetime model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use wayfarer_core::domain::itinerary::ItineraryPoint;
use wayfarer_core::domain::job::JobRecord;

use super::{RegistryError, RequestStore};

/// In-memory `Uuid -> JobRecord` store
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    records: Arc<RwLock<HashMap<Uuid, JobRecord>>>,
}

impl InMemoryRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked records, terminal ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RequestStore for InMemoryRegistry {
    async fn create(&self, id: Uuid) -> Result<(), RegistryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(RegistryError::AlreadyExists(id));
        }
        records.insert(id, JobRecord::pending());
        Ok(())
    }

    async fn advance(&self, id: Uuid, progress: f64, message: &str) -> Result<(), RegistryError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        if record.is_terminal() {
            return Err(RegistryError::TerminalState(id));
        }
        record.advance(progress, message);
        Ok(())
    }

    async fn complete(&self, id: Uuid, result: Vec<ItineraryPoint>) -> Result<(), RegistryError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        if record.is_terminal() {
            return Err(RegistryError::TerminalState(id));
        }
        record.complete(result);
        Ok(())
    }

    async fn fail(&self, id: Uuid, error: String) -> Result<(), RegistryError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        if record.is_terminal() {
            return Err(RegistryError::TerminalState(id));
        }
        record.fail(error);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Option<JobRecord> {
        self.records.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::domain::job::{INITIAL_PROGRESS, JobStatus};

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = InMemoryRegistry::new();
        let id = Uuid::new_v4();

        registry.create(id).await.unwrap();
        let record = registry.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Pending);
        assert_eq!(record.progress, INITIAL_PROGRESS);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let registry = InMemoryRegistry::new();
        let id = Uuid::new_v4();

        registry.create(id).await.unwrap();
        assert_eq!(
            registry.create(id).await,
            Err(RegistryError::AlreadyExists(id))
        );
    }

    #[tokio::test]
    async fn test_advance_unknown_id() {
        let registry = InMemoryRegistry::new();
        let id = Uuid::new_v4();
        assert_eq!(
            registry.advance(id, 0.2, "Analyzing").await,
            Err(RegistryError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn test_terminal_records_are_frozen() {
        let registry = InMemoryRegistry::new();
        let id = Uuid::new_v4();
        registry.create(id).await.unwrap();
        registry.complete(id, Vec::new()).await.unwrap();

        assert_eq!(
            registry.advance(id, 0.5, "late checkpoint").await,
            Err(RegistryError::TerminalState(id))
        );
        assert_eq!(
            registry.fail(id, "late failure".to_string()).await,
            Err(RegistryError::TerminalState(id))
        );
        assert_eq!(
            registry.complete(id, Vec::new()).await,
            Err(RegistryError::TerminalState(id))
        );

        // The stored record is untouched
        let record = registry.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Completed);
        assert_eq!(record.progress, 1.0);
        assert!(record.error.is_none());
    }

    #[tokio::test]
    async fn test_records_are_retained_after_completion() {
        let registry = InMemoryRegistry::new();
        let id = Uuid::new_v4();
        registry.create(id).await.unwrap();
        registry.fail(id, "no luck".to_string()).await.unwrap();

        assert_eq!(registry.len().await, 1);
        assert!(registry.get(id).await.is_some());
    }

    #[tokio::test]
    async fn test_independent_records() {
        let registry = InMemoryRegistry::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        registry.create(a).await.unwrap();
        registry.create(b).await.unwrap();

        registry.advance(a, 0.6, "Creating personalized recommendations").await.unwrap();

        assert_eq!(registry.get(a).await.unwrap().progress, 0.6);
        assert_eq!(registry.get(b).await.unwrap().progress, INITIAL_PROGRESS);
    }
}
