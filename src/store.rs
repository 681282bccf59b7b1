use crate::event::AnalyticsEvent;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("event name must not be empty")]
    EmptyEventName,
}

/// Concurrency-safe grouping of accepted events by type name, insertion
/// order preserved within each bucket. One mutex serializes `append`,
/// `snapshot` and `clear`; there are no per-bucket locks, so a snapshot
/// never observes a partially applied mutation.
#[derive(Debug, Default)]
pub struct EventStore {
    buckets: Mutex<HashMap<String, VecDeque<AnalyticsEvent>>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends under the event's type key. Buckets are append-only: an
    /// accepted event lives until `clear` or process end. The only failure
    /// is a caller error (empty name), in which case nothing is mutated.
    pub fn append(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        if event.name.is_empty() {
            return Err(AnalyticsError::EmptyEventName);
        }

        let mut buckets = self.lock();
        buckets.entry(event.name.clone()).or_default().push_back(event);
        Ok(())
    }

    /// Point-in-time deep copy. The returned mapping shares nothing with
    /// the live store; mutating either side never affects the other.
    pub fn snapshot(&self) -> HashMap<String, Vec<AnalyticsEvent>> {
        self.lock()
            .iter()
            .map(|(name, bucket)| (name.clone(), bucket.iter().cloned().collect()))
            .collect()
    }

    /// Empties every bucket atomically. Idempotent.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<AnalyticsEvent>>> {
        // A poisoned lock still holds structurally valid buckets; telemetry
        // must never panic the feature path that called it.
        self.buckets.lock().unwrap_or_else(|e| e.into_inner())
    }
}
