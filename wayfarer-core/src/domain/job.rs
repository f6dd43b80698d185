//! Job tracking domain types
//!
//! A [`JobRecord`] is the mutable status/result record tracked per submitted
//! travel request. Records are created pending, advance through progress
//! checkpoints, and reach exactly one terminal state (completed or failed),
//! after which they never change again.

use serde::{Deserialize, Serialize};

use crate::domain::itinerary::ItineraryPoint;

/// Initial progress value assigned at creation time
pub const INITIAL_PROGRESS: f64 = 0.1;

/// Message attached to a freshly created record
pub const INITIAL_MESSAGE: &str = "Starting itinerary generation";

/// Lifecycle status of a travel request job
///
/// "pending" covers every in-progress sub-stage; the stage itself is
/// reported through the record's progress and message fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether this status admits no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Pending => "pending",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Status/result record for one submitted travel request
///
/// Invariants:
/// - `result` is populated if and only if `status == Completed`
/// - `error` is populated if and only if `status == Failed`
/// - `progress` is non-decreasing while pending, 1.0 on completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub status: JobStatus,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<ItineraryPoint>>,
}

impl JobRecord {
    /// Creates a record in its initial pending state
    pub fn pending() -> Self {
        Self {
            status: JobStatus::Pending,
            progress: INITIAL_PROGRESS,
            message: Some(INITIAL_MESSAGE.to_string()),
            error: None,
            result: None,
        }
    }

    /// Whether the record has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Records a progress checkpoint
    ///
    /// Progress is clamped so observers never see it regress. Callers must
    /// not advance a terminal record; the registry enforces that guard.
    pub fn advance(&mut self, progress: f64, message: &str) {
        self.progress = self.progress.max(progress.clamp(0.0, 1.0));
        self.message = Some(message.to_string());
    }

    /// Terminal transition: generation succeeded
    pub fn complete(&mut self, result: Vec<ItineraryPoint>) {
        self.status = JobStatus::Completed;
        self.progress = 1.0;
        self.message = Some("Itinerary generation complete".to_string());
        self.error = None;
        self.result = Some(result);
    }

    /// Terminal transition: generation failed
    pub fn fail(&mut self, error: String) {
        self.status = JobStatus::Failed;
        self.progress = 0.0;
        self.message = None;
        self.error = Some(error);
        self.result = None;
    }
}
