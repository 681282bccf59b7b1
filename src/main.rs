use anyhow::Result;
use astral_analytics::features::{BookmarkKind, BookmarkOp};
use astral_analytics::{compute_summary, AnalyticsTracker, Params};
use std::sync::Arc;

// Demo driver: concurrent call sites feeding one tracker, then a dashboard
// summary of what survived the consent gate and the privacy filter.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let tracker = Arc::new(AnalyticsTracker::new());
    tracing::info!(session = %tracker.session_id(), "analytics session started");

    // Simulated feature call sites on independent tasks.
    let search = {
        let tracker = tracker.clone();
        tokio::spawn(async move {
            for i in 0..5u32 {
                let _ = tracker.log_search_used(8 + i, 12);
            }
        })
    };
    let playback = {
        let tracker = tracker.clone();
        tokio::spawn(async move {
            let _ = tracker.log_bookmark_action(BookmarkOp::Add, BookmarkKind::Manual, 120, 0.25);
            let _ = tracker.log_equalizer_changed("bass_boost", 5);
            let _ = tracker.log_subtitle_generation("whisper", true, 1800);
            // Credential-shaped values never survive the filter.
            let _ = tracker.record(
                "content_shared",
                Params::new()
                    .set("share_target", "clipboard")
                    .set("auth_token", "tok_live_123456"),
            );
        })
    };

    search.await?;
    playback.await?;

    let snapshot = tracker.local_analytics();
    let summary = compute_summary(&snapshot);
    tracing::info!(
        total = summary.total_events,
        "captured events this session"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
