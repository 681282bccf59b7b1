use crate::event::AnalyticsEvent;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Aggregate view of one snapshot, feeding the local usage dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageSummary {
    pub total_events: u64,
    pub events_by_type: BTreeMap<String, u64>,
    pub most_used_feature: Option<String>,
    pub first_event_ms: Option<u64>,
    pub last_event_ms: Option<u64>,
}

/// Pure aggregation over a snapshot. Never reads live store state, so it can
/// run on a copy handed to the UI without holding any lock.
pub fn compute_summary(snapshot: &HashMap<String, Vec<AnalyticsEvent>>) -> UsageSummary {
    let mut summary = UsageSummary::default();

    for (name, bucket) in snapshot {
        if bucket.is_empty() {
            continue;
        }
        summary.total_events += bucket.len() as u64;
        summary
            .events_by_type
            .insert(name.clone(), bucket.len() as u64);

        for event in bucket {
            summary.first_event_ms = Some(match summary.first_event_ms {
                Some(first) => first.min(event.timestamp_ms),
                None => event.timestamp_ms,
            });
            summary.last_event_ms = Some(match summary.last_event_ms {
                Some(last) => last.max(event.timestamp_ms),
                None => event.timestamp_ms,
            });
        }
    }

    // Ties resolve to the lexicographically first name, keeping the result
    // deterministic across runs.
    summary.most_used_feature = summary
        .events_by_type
        .iter()
        .max_by(|(a_name, a_count), (b_name, b_count)| {
            a_count.cmp(b_count).then(b_name.cmp(a_name))
        })
        .map(|(name, _)| name.clone());

    summary
}
