use crate::consent::ConsentGate;
use crate::event::{AnalyticsEvent, Params};
use crate::privacy::PrivacyFilter;
use crate::store::{AnalyticsError, EventStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// The single entry point feature call sites use. Composes the consent gate,
/// the privacy filter and the event store on every record call.
///
/// All methods take `&self`; the tracker is meant to be shared (e.g. behind
/// an `Arc`) across concurrent feature call sites.
#[derive(Debug)]
pub struct AnalyticsTracker {
    consent: ConsentGate,
    filter: PrivacyFilter,
    store: EventStore,
    last_stamp_ms: AtomicU64,
    session_id: Uuid,
}

impl AnalyticsTracker {
    pub fn new() -> Self {
        Self::with_consent(ConsentGate::default())
    }

    /// Consent is injected, not ambient; the caller decides the initial state.
    pub fn with_consent(consent: ConsentGate) -> Self {
        Self {
            consent,
            filter: PrivacyFilter::new(),
            store: EventStore::new(),
            last_stamp_ms: AtomicU64::new(0),
            session_id: Uuid::new_v4(),
        }
    }

    pub fn enable_analytics(&self, enabled: bool) {
        self.consent.set_enabled(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.consent.is_enabled()
    }

    /// Correlates snapshots taken from this process session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Records one feature event. Best-effort: a disabled gate or a privacy
    /// rejection is a silent `Ok(())`, never an error, and nothing here can
    /// panic or block the feature path. The only surfaced failure is an
    /// empty event name, which is a caller bug.
    pub fn record(&self, name: impl Into<String>, params: Params) -> Result<(), AnalyticsError> {
        // 1. Consent: disabled recording leaves zero footprint. No event is
        //    built and the filter never runs.
        if !self.consent.is_enabled() {
            return Ok(());
        }

        let name = name.into();
        if name.is_empty() {
            return Err(AnalyticsError::EmptyEventName);
        }

        // 2. Privacy: a fully redacted event is dropped, not reported.
        let Some(params) = self.filter.filter(params) else {
            tracing::debug!(event = %name, "event dropped by privacy filter");
            return Ok(());
        };

        // 3. Stamp and append.
        let event = AnalyticsEvent {
            name,
            timestamp_ms: self.stamp_ms(),
            params,
        };
        self.store.append(event)
    }

    /// Point-in-time copy of all captured events, grouped by type.
    pub fn local_analytics(&self) -> HashMap<String, Vec<AnalyticsEvent>> {
        self.store.snapshot()
    }

    pub fn clear_local_analytics(&self) {
        self.store.clear();
    }

    // Positive and non-decreasing across every event this tracker stamps,
    // even if the wall clock steps backwards.
    fn stamp_ms(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
            .max(1);
        let prev = self.last_stamp_ms.fetch_max(now, Ordering::SeqCst);
        prev.max(now)
    }
}

impl Default for AnalyticsTracker {
    fn default() -> Self {
        Self::new()
    }
}
