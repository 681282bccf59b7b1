use std::sync::atomic::{AtomicBool, Ordering};

/// Single source of truth for whether capture is active.
///
/// SeqCst on both sides: once a disabling call has returned, every record
/// call that starts afterwards observes the flag as off. Toggling never
/// clears previously captured events; clearing is a separate operation.
#[derive(Debug)]
pub struct ConsentGate {
    enabled: AtomicBool,
}

impl ConsentGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Default for ConsentGate {
    /// Capture is on until the user opts out.
    fn default() -> Self {
        Self::new(true)
    }
}
