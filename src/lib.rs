//! Local feature-analytics core for the AstralStream player.
//!
//! # SAFETY INVARIANT
//! Analytics is a best-effort side channel. No error, rejection or disabled
//! gate may ever propagate to, block, or alter the feature path that
//! triggered a recording call.
//!
//! # PRIVACY INVARIANT
//! The store must **NEVER** retain a value matching a sensitive pattern
//! (passwords, API keys, tokens, email addresses). Filtering happens before
//! acceptance, and the pattern set may only grow.

pub mod consent;
pub mod event;
pub mod features;
pub mod privacy;
pub mod store;
pub mod summary;
pub mod tracker;

pub use consent::ConsentGate;
pub use event::{AnalyticsEvent, ParamValue, Params};
pub use privacy::PrivacyFilter;
pub use store::{AnalyticsError, EventStore};
pub use summary::{compute_summary, UsageSummary};
pub use tracker::AnalyticsTracker;
