//! Typed helpers for the recognized feature events.
//!
//! Each helper builds the documented parameter set and delegates to
//! [`AnalyticsTracker::record`]. Helpers carry counts, durations, positions
//! and short labels only; none accepts raw user content such as query text
//! or file paths. The event-name space stays open: new call sites may record
//! any name directly without touching this module.

use crate::event::Params;
use crate::store::AnalyticsError;
use crate::tracker::AnalyticsTracker;

pub const FEATURE_SEARCH_USED: &str = "feature_search_used";
pub const VIDEO_PLAYBACK: &str = "video_playback";
pub const ENGAGEMENT_SESSION: &str = "engagement_session";
pub const EQUALIZER_SETTINGS_CHANGED: &str = "equalizer_settings_changed";
pub const VOICE_CONTROL_SESSION_ENDED: &str = "voice_control_session_ended";
pub const SUBTITLE_GENERATION_COMPLETED: &str = "subtitle_generation_completed";
pub const BOOKMARK_ACTION: &str = "bookmark_action";
pub const CONTENT_SHARED: &str = "content_shared";
pub const PERFORMANCE_SETTINGS_CHANGED: &str = "performance_settings_changed";
pub const FEATURE_DISCOVERED: &str = "feature_discovered";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkOp {
    Add,
    Remove,
}

impl BookmarkOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkOp::Add => "add",
            BookmarkOp::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkKind {
    Manual,
    Auto,
}

impl BookmarkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkKind::Manual => "manual",
            BookmarkKind::Auto => "auto",
        }
    }
}

// Oversized u64 inputs clamp to i64::MAX instead of wrapping negative.
fn as_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl AnalyticsTracker {
    /// Playback finished or checkpointed. The id is an internal content id,
    /// never a title or path.
    pub fn log_video_playback(
        &self,
        video_id: &str,
        duration_ms: u64,
        quality: &str,
    ) -> Result<(), AnalyticsError> {
        self.record(
            VIDEO_PLAYBACK,
            Params::new()
                .set("video_id", video_id)
                .set("duration_ms", as_count(duration_ms))
                .set("quality", quality),
        )
    }

    /// Search executed. Only the shape of the query is kept, never its text.
    pub fn log_search_used(
        &self,
        query_length: u32,
        result_count: u32,
    ) -> Result<(), AnalyticsError> {
        self.record(
            FEATURE_SEARCH_USED,
            Params::new()
                .set("query_length", query_length)
                .set("result_count", result_count),
        )
    }

    pub fn log_equalizer_changed(
        &self,
        preset: &str,
        band_count: u32,
    ) -> Result<(), AnalyticsError> {
        self.record(
            EQUALIZER_SETTINGS_CHANGED,
            Params::new()
                .set("preset", preset)
                .set("band_count", band_count),
        )
    }

    pub fn log_voice_session_ended(
        &self,
        command_count: u32,
        duration_ms: u64,
        success: bool,
    ) -> Result<(), AnalyticsError> {
        self.record(
            VOICE_CONTROL_SESSION_ENDED,
            Params::new()
                .set("command_count", command_count)
                .set("duration_ms", as_count(duration_ms))
                .set("success", success),
        )
    }

    pub fn log_subtitle_generation(
        &self,
        provider: &str,
        success: bool,
        duration_ms: u64,
    ) -> Result<(), AnalyticsError> {
        self.record(
            SUBTITLE_GENERATION_COMPLETED,
            Params::new()
                .set("provider", provider)
                .set("success", success)
                .set("duration_ms", as_count(duration_ms)),
        )
    }

    /// `position_percentage` is clamped into [0, 1].
    pub fn log_bookmark_action(
        &self,
        op: BookmarkOp,
        kind: BookmarkKind,
        video_position: u64,
        position_percentage: f64,
    ) -> Result<(), AnalyticsError> {
        self.record(
            BOOKMARK_ACTION,
            Params::new()
                .set("bookmark_action", op.as_str())
                .set("bookmark_type", kind.as_str())
                .set("video_position", as_count(video_position))
                .set("position_percentage", position_percentage.clamp(0.0, 1.0)),
        )
    }

    pub fn log_content_shared(
        &self,
        share_target: &str,
        content_kind: &str,
    ) -> Result<(), AnalyticsError> {
        self.record(
            CONTENT_SHARED,
            Params::new()
                .set("share_target", share_target)
                .set("content_kind", content_kind),
        )
    }

    pub fn log_performance_settings_changed(
        &self,
        setting: &str,
        value: &str,
    ) -> Result<(), AnalyticsError> {
        self.record(
            PERFORMANCE_SETTINGS_CHANGED,
            Params::new().set("setting", setting).set("value", value),
        )
    }

    pub fn log_feature_discovered(
        &self,
        feature: &str,
        discovered_via: &str,
    ) -> Result<(), AnalyticsError> {
        self.record(
            FEATURE_DISCOVERED,
            Params::new()
                .set("feature", feature)
                .set("discovered_via", discovered_via),
        )
    }
}
