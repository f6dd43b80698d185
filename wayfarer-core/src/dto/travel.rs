//! Travel request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::itinerary::ItineraryPoint;
use crate::domain::job::{JobRecord, JobStatus};

/// Response to a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub request_id: Uuid,
    pub status: JobStatus,
}

/// Point-in-time view of a job, as returned by the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub request_id: Uuid,
    pub status: JobStatus,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// Snapshot of a tracked record
    pub fn from_record(request_id: Uuid, record: &JobRecord) -> Self {
        Self {
            request_id,
            status: record.status,
            progress: record.progress,
            message: record.message.clone(),
            error: record.error.clone(),
        }
    }

    /// Synthetic failed snapshot for an unknown request id
    pub fn not_found(request_id: Uuid) -> Self {
        Self {
            request_id,
            status: JobStatus::Failed,
            progress: 0.0,
            message: None,
            error: Some("Request not found".to_string()),
        }
    }

    /// Whether this snapshot reflects a terminal status
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Final itinerary for a completed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResult {
    pub itinerary: Vec<ItineraryPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_pending_record() {
        let record = JobRecord::pending();
        let id = Uuid::new_v4();
        let snapshot = StatusSnapshot::from_record(id, &record);
        assert_eq!(snapshot.request_id, id);
        assert_eq!(snapshot.status, JobStatus::Pending);
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_terminal());
    }

    #[test]
    fn test_not_found_snapshot_is_failure_shaped() {
        let snapshot = StatusSnapshot::not_found(Uuid::new_v4());
        assert_eq!(snapshot.status, JobStatus::Failed);
        assert_eq!(snapshot.progress, 0.0);
        assert_eq!(snapshot.error.as_deref(), Some("Request not found"));
        assert!(snapshot.is_terminal());
    }

    #[test]
    fn test_snapshot_omits_empty_optionals() {
        let snapshot = StatusSnapshot::from_record(Uuid::new_v4(), &JobRecord::pending());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["status"], "pending");
    }
}
