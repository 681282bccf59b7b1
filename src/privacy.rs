use crate::event::Params;
use regex::Regex;
use std::sync::LazyLock;

// Case-insensitive substrings that mark a key or value as sensitive.
// This set may grow; it must never shrink.
const SENSITIVE_MARKERS: [&str; 4] = ["password", "api_key", "token", "secret"];

// Domain suffix such as ".com". Any '@' in the value together with such a
// suffix marks the text email-like, contiguous or not; an address split by
// whitespace must still never reach the store.
static RE_DOMAIN_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z]{2,}").ok());

fn is_sensitive(text: &str) -> bool {
    let lower = text.to_lowercase();
    if SENSITIVE_MARKERS.iter().any(|m| lower.contains(m)) {
        return true;
    }
    text.contains('@')
        && RE_DOMAIN_SUFFIX
            .as_ref()
            .is_some_and(|re| re.is_match(text))
}

/// Redaction policy applied to every parameter mapping before it can reach
/// the store. Hard invariant: the store never holds a value that matches a
/// sensitive pattern.
#[derive(Debug)]
pub struct PrivacyFilter;

impl PrivacyFilter {
    pub fn new() -> Self {
        Self
    }

    /// Drops each parameter whose key or value text matches a sensitive
    /// pattern. Returns `None` when filtering emptied a mapping that was
    /// non-empty on entry; the caller must then reject the whole event.
    /// An empty mapping passes through unchanged.
    pub fn filter(&self, params: Params) -> Option<Params> {
        if params.is_empty() {
            return Some(params);
        }

        let kept: Params = params
            .into_iter()
            .filter(|(key, value)| !is_sensitive(key) && !is_sensitive(&value.match_text()))
            .collect();

        if kept.is_empty() {
            None
        } else {
            Some(kept)
        }
    }
}

impl Default for PrivacyFilter {
    fn default() -> Self {
        Self::new()
    }
}
