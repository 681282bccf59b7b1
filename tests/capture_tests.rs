use astral_analytics::features::{
    BookmarkKind, BookmarkOp, BOOKMARK_ACTION, ENGAGEMENT_SESSION, FEATURE_SEARCH_USED,
    VIDEO_PLAYBACK,
};
use astral_analytics::{
    compute_summary, AnalyticsError, AnalyticsEvent, AnalyticsTracker, ConsentGate, EventStore,
    ParamValue, Params,
};

#[test]
fn disabled_records_leave_no_footprint() {
    let tracker = AnalyticsTracker::with_consent(ConsentGate::new(false));

    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("query_length", 4))
        .unwrap();
    tracker
        .log_bookmark_action(BookmarkOp::Add, BookmarkKind::Manual, 30, 0.1)
        .unwrap();

    assert!(
        tracker.local_analytics().is_empty(),
        "disabled gate must capture nothing"
    );
}

#[test]
fn consent_toggle_keeps_earlier_events_only() {
    let tracker = AnalyticsTracker::new();

    // 1. Enabled: X is captured.
    tracker.enable_analytics(true);
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("result_count", 7))
        .unwrap();

    // 2. Disabled: Y is a silent no-op.
    tracker.enable_analytics(false);
    assert!(!tracker.is_enabled());
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("result_count", 9))
        .unwrap();

    let snapshot = tracker.local_analytics();
    let bucket = &snapshot[FEATURE_SEARCH_USED];
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].params.get("result_count"), Some(&ParamValue::Int(7)));
}

#[test]
fn toggling_consent_does_not_clear_captured_events() {
    let tracker = AnalyticsTracker::new();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("result_count", 1))
        .unwrap();

    tracker.enable_analytics(false);
    tracker.enable_analytics(true);

    assert_eq!(tracker.local_analytics()[FEATURE_SEARCH_USED].len(), 1);
}

#[test]
fn clear_is_idempotent() {
    let tracker = AnalyticsTracker::new();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("result_count", 3))
        .unwrap();

    tracker.clear_local_analytics();
    assert!(tracker.local_analytics().is_empty());

    tracker.clear_local_analytics();
    assert!(tracker.local_analytics().is_empty());
}

#[test]
fn bookmark_round_trip() {
    let tracker = AnalyticsTracker::new();
    tracker
        .log_bookmark_action(BookmarkOp::Add, BookmarkKind::Manual, 120, 0.25)
        .unwrap();

    let snapshot = tracker.local_analytics();
    let bucket = &snapshot[BOOKMARK_ACTION];
    assert_eq!(bucket.len(), 1);

    let event = &bucket[0];
    assert!(event.timestamp_ms > 0);
    assert_eq!(event.params.len(), 4);
    assert_eq!(
        event.params.get("bookmark_action"),
        Some(&ParamValue::Str("add".to_string()))
    );
    assert_eq!(
        event.params.get("bookmark_type"),
        Some(&ParamValue::Str("manual".to_string()))
    );
    assert_eq!(
        event.params.get("video_position"),
        Some(&ParamValue::Int(120))
    );
    assert_eq!(
        event.params.get("position_percentage"),
        Some(&ParamValue::Float(0.25))
    );
}

#[test]
fn same_type_ordering_preserved() {
    let tracker = AnalyticsTracker::new();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("seq", 1))
        .unwrap();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("seq", 2))
        .unwrap();

    let snapshot = tracker.local_analytics();
    let bucket = &snapshot[FEATURE_SEARCH_USED];
    assert_eq!(bucket[0].params.get("seq"), Some(&ParamValue::Int(1)));
    assert_eq!(bucket[1].params.get("seq"), Some(&ParamValue::Int(2)));
    assert!(bucket[0].timestamp_ms <= bucket[1].timestamp_ms);
}

#[test]
fn empty_name_fails_fast_without_mutation() {
    let tracker = AnalyticsTracker::new();
    let result = tracker.record("", Params::new().set("seq", 1));

    assert_eq!(result, Err(AnalyticsError::EmptyEventName));
    assert!(tracker.local_analytics().is_empty());
}

#[test]
fn store_rejects_empty_name_directly() {
    let store = EventStore::new();
    let result = store.append(AnalyticsEvent {
        name: String::new(),
        timestamp_ms: 1,
        params: Params::new(),
    });

    assert_eq!(result, Err(AnalyticsError::EmptyEventName));
    assert!(store.snapshot().is_empty());
}

#[test]
fn snapshot_is_independent_copy() {
    let tracker = AnalyticsTracker::new();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("seq", 1))
        .unwrap();

    // Mutating the copy must not touch the live store.
    let mut snapshot = tracker.local_analytics();
    snapshot.clear();
    assert_eq!(tracker.local_analytics()[FEATURE_SEARCH_USED].len(), 1);

    // And later store mutations must not show up in an older copy.
    let earlier = tracker.local_analytics();
    tracker
        .record(FEATURE_SEARCH_USED, Params::new().set("seq", 2))
        .unwrap();
    assert_eq!(earlier[FEATURE_SEARCH_USED].len(), 1);
}

#[test]
fn event_without_params_is_recordable() {
    let tracker = AnalyticsTracker::new();
    tracker.record(ENGAGEMENT_SESSION, Params::new()).unwrap();

    let snapshot = tracker.local_analytics();
    assert_eq!(snapshot[ENGAGEMENT_SESSION].len(), 1);
    assert!(snapshot[ENGAGEMENT_SESSION][0].params.is_empty());
}

#[test]
fn accepted_events_live_until_clear_in_long_sessions() {
    // Every accepted event survives until an explicit clear; there is no
    // silent eviction threshold.
    let store = EventStore::new();
    for seq in 0..10_001i64 {
        store
            .append(AnalyticsEvent {
                name: FEATURE_SEARCH_USED.to_string(),
                timestamp_ms: (seq + 1) as u64,
                params: Params::new().set("seq", seq),
            })
            .unwrap();
    }

    let snapshot = store.snapshot();
    let bucket = &snapshot[FEATURE_SEARCH_USED];
    assert_eq!(bucket.len(), 10_001);
    assert_eq!(bucket[0].params.get("seq"), Some(&ParamValue::Int(0)));
    assert_eq!(
        bucket[10_000].params.get("seq"),
        Some(&ParamValue::Int(10_000))
    );

    store.clear();
    assert!(store.snapshot().is_empty());
}

#[test]
fn video_playback_round_trip() {
    let tracker = AnalyticsTracker::new();
    tracker
        .log_video_playback("vid-42", 95_000, "1080p")
        .unwrap();

    let snapshot = tracker.local_analytics();
    let event = &snapshot[VIDEO_PLAYBACK][0];
    assert!(event.timestamp_ms > 0);
    assert_eq!(
        event.params.get("video_id"),
        Some(&ParamValue::Str("vid-42".to_string()))
    );
    assert_eq!(
        event.params.get("duration_ms"),
        Some(&ParamValue::Int(95_000))
    );
    assert_eq!(
        event.params.get("quality"),
        Some(&ParamValue::Str("1080p".to_string()))
    );
}

#[test]
fn oversized_durations_clamp_instead_of_wrapping() {
    let tracker = AnalyticsTracker::new();
    tracker.log_video_playback("vid-1", u64::MAX, "auto").unwrap();
    tracker.log_voice_session_ended(2, u64::MAX, true).unwrap();

    let snapshot = tracker.local_analytics();
    assert_eq!(
        snapshot[VIDEO_PLAYBACK][0].params.get("duration_ms"),
        Some(&ParamValue::Int(i64::MAX))
    );
    assert_eq!(
        snapshot["voice_control_session_ended"][0].params.get("duration_ms"),
        Some(&ParamValue::Int(i64::MAX))
    );
}

#[test]
fn summary_matches_snapshot() {
    let tracker = AnalyticsTracker::new();
    for i in 0..3 {
        tracker
            .record(FEATURE_SEARCH_USED, Params::new().set("seq", i))
            .unwrap();
    }
    tracker
        .log_bookmark_action(BookmarkOp::Remove, BookmarkKind::Auto, 90, 0.5)
        .unwrap();

    let snapshot = tracker.local_analytics();
    let summary = compute_summary(&snapshot);

    assert_eq!(summary.total_events, 4);
    assert_eq!(summary.events_by_type[FEATURE_SEARCH_USED], 3);
    assert_eq!(summary.events_by_type[BOOKMARK_ACTION], 1);
    assert_eq!(
        summary.most_used_feature.as_deref(),
        Some(FEATURE_SEARCH_USED)
    );
    assert!(summary.first_event_ms.unwrap() <= summary.last_event_ms.unwrap());
}
