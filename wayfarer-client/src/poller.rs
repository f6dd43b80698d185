//! Travel request poller
//!
//! Repeatedly queries status at a fixed interval until the request reaches a
//! terminal state or the attempt budget runs out. The loop is generic over
//! [`StatusSource`] so it can be tested without a server; dropping the
//! returned future cancels polling without affecting the job itself.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use wayfarer_core::domain::itinerary::ItineraryPoint;
use wayfarer_core::domain::job::JobStatus;
use wayfarer_core::dto::travel::StatusSnapshot;

use crate::PlannerClient;
use crate::error::{ClientError, Result};

/// Source of job status and result snapshots
///
/// Implemented by [`PlannerClient`] over HTTP; tests substitute a scripted
/// source.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn status(&self, request_id: Uuid) -> Result<StatusSnapshot>;
    async fn fetch_result(&self, request_id: Uuid) -> Result<Vec<ItineraryPoint>>;
}

#[async_trait]
impl StatusSource for PlannerClient {
    async fn status(&self, request_id: Uuid) -> Result<StatusSnapshot> {
        self.travel_status(request_id).await
    }

    async fn fetch_result(&self, request_id: Uuid) -> Result<Vec<ItineraryPoint>> {
        self.travel_result(request_id).await
    }
}

/// Polling parameters: bounded attempts at a fixed interval, no backoff
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

/// Poll a travel request until it completes, fails, or the budget runs out
pub async fn poll_until_complete<S: StatusSource>(
    source: &S,
    request_id: Uuid,
    config: &PollConfig,
) -> Result<Vec<ItineraryPoint>> {
    poll_with_observer(source, request_id, config, |_| {}).await
}

/// Like [`poll_until_complete`], invoking `observer` with every snapshot
///
/// The timeout is client-side only: giving up does not affect the job's
/// eventual outcome on the server.
pub async fn poll_with_observer<S, F>(
    source: &S,
    request_id: Uuid,
    config: &PollConfig,
    mut observer: F,
) -> Result<Vec<ItineraryPoint>>
where
    S: StatusSource,
    F: FnMut(&StatusSnapshot),
{
    for attempt in 0..config.max_attempts {
        let snapshot = source.status(request_id).await?;
        debug!(
            "Poll attempt {} for {}: {} ({:.0}%)",
            attempt + 1,
            request_id,
            snapshot.status,
            snapshot.progress * 100.0
        );
        observer(&snapshot);

        match snapshot.status {
            JobStatus::Completed => return source.fetch_result(request_id).await,
            JobStatus::Failed => {
                let reason = snapshot
                    .error
                    .unwrap_or_else(|| "Unknown error occurred".to_string());
                return Err(ClientError::JobFailed(reason));
            }
            JobStatus::Pending => tokio::time::sleep(config.interval).await,
        }
    }

    Err(ClientError::PollTimeout {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use wayfarer_core::domain::itinerary::{Coordinates, point_type};
    use wayfarer_core::domain::job::JobRecord;

    /// Scripted status source: plays back a queue of snapshots, then
    /// repeats the last one
    struct ScriptedSource {
        snapshots: Mutex<VecDeque<StatusSnapshot>>,
        result: Vec<ItineraryPoint>,
    }

    impl ScriptedSource {
        fn new(snapshots: Vec<StatusSnapshot>, result: Vec<ItineraryPoint>) -> Self {
            Self {
                snapshots: Mutex::new(snapshots.into()),
                result,
            }
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn status(&self, _request_id: Uuid) -> Result<StatusSnapshot> {
            let mut snapshots = self.snapshots.lock().unwrap();
            if snapshots.len() > 1 {
                Ok(snapshots.pop_front().unwrap())
            } else {
                Ok(snapshots.front().cloned().unwrap())
            }
        }

        async fn fetch_result(&self, _request_id: Uuid) -> Result<Vec<ItineraryPoint>> {
            Ok(self.result.clone())
        }
    }

    fn pending(id: Uuid, progress: f64) -> StatusSnapshot {
        let mut record = JobRecord::pending();
        record.advance(progress, "working");
        StatusSnapshot::from_record(id, &record)
    }

    fn completed(id: Uuid) -> StatusSnapshot {
        let mut record = JobRecord::pending();
        record.complete(Vec::new());
        StatusSnapshot::from_record(id, &record)
    }

    fn failed(id: Uuid, reason: &str) -> StatusSnapshot {
        let mut record = JobRecord::pending();
        record.fail(reason.to_string());
        StatusSnapshot::from_record(id, &record)
    }

    fn sample_point() -> ItineraryPoint {
        ItineraryPoint {
            kind: point_type::START.to_string(),
            time: chrono::Utc::now(),
            end_time: None,
            location: "Hotel".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            description: "Start".to_string(),
            rating: None,
            attraction_type: None,
            vicinity: None,
            image_reference: None,
        }
    }

    fn fast_config(max_attempts: u32) -> PollConfig {
        PollConfig {
            max_attempts,
            interval: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_poll_returns_result_on_completion() {
        let id = Uuid::new_v4();
        let source = ScriptedSource::new(
            vec![pending(id, 0.2), pending(id, 0.6), completed(id)],
            vec![sample_point()],
        );

        let itinerary = poll_until_complete(&source, id, &fast_config(10))
            .await
            .unwrap();
        assert_eq!(itinerary.len(), 1);
    }

    #[tokio::test]
    async fn test_poll_surfaces_job_failure() {
        let id = Uuid::new_v4();
        let source =
            ScriptedSource::new(vec![pending(id, 0.4), failed(id, "no itinerary")], Vec::new());

        let err = poll_until_complete(&source, id, &fast_config(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::JobFailed(reason) if reason == "no itinerary"));
    }

    #[tokio::test]
    async fn test_poll_times_out_after_max_attempts() {
        let id = Uuid::new_v4();
        let source = ScriptedSource::new(vec![pending(id, 0.2)], Vec::new());

        let err = poll_until_complete(&source, id, &fast_config(3))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::PollTimeout { attempts: 3 }));
    }

    #[tokio::test]
    async fn test_observer_sees_every_snapshot() {
        let id = Uuid::new_v4();
        let source = ScriptedSource::new(
            vec![pending(id, 0.2), pending(id, 0.8), completed(id)],
            Vec::new(),
        );

        let mut progresses = Vec::new();
        poll_with_observer(&source, id, &fast_config(10), |s| {
            progresses.push(s.progress);
        })
        .await
        .unwrap();

        assert_eq!(progresses, vec![0.2, 0.8, 1.0]);
    }
}
