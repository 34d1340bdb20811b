//! Shared switch deciding whether activities are recorded at all.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::activity::ports::ActivityLogConfig;

/// Process-wide enable/disable switch for activity recording.
///
/// Clones share one flag, so toggling through any handle is observed by
/// every recorder holding a clone. The flag is a coarse feature switch and
/// is not synchronised with recordings already in flight.
///
/// # Examples
///
/// ```
/// use activitylog::activity::services::LogGate;
///
/// let gate = LogGate::default();
/// let shared = gate.clone();
///
/// shared.disable();
/// assert!(gate.is_disabled());
///
/// gate.enable();
/// assert!(!shared.is_disabled());
/// ```
#[derive(Debug, Clone)]
pub struct LogGate {
    enabled: Arc<AtomicBool>,
}

impl LogGate {
    /// Creates a gate in the given state.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// Creates a gate in the configured initial state.
    #[must_use]
    pub fn from_config(config: &ActivityLogConfig) -> Self {
        Self::new(config.enabled)
    }

    /// Turns recording on.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    /// Turns recording off.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    /// Returns `true` while recording is off.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.is_enabled()
    }

    /// Returns `true` while recording is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for LogGate {
    fn default() -> Self {
        Self::new(true)
    }
}
