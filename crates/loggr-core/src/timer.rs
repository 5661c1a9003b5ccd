//! Named stopwatch timers

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{LoggrError, LoggrResult};

/// Label used when a timer call does not name one
pub const DEFAULT_TIMER_LABEL: &str = "default";

/// Start instants keyed by timer label
///
/// Starting a label again restarts it. Reading a label does not remove it,
/// so one start can be measured several times.
#[derive(Debug, Clone, Default)]
pub struct TimerTable {
    started: HashMap<String, Instant>,
}

impl TimerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now` as the start of `label`
    pub fn start(&mut self, label: &str) {
        self.start_at(label, Instant::now());
    }

    /// Record an explicit start instant
    pub fn start_at(&mut self, label: &str, at: Instant) {
        self.started.insert(label.to_string(), at);
    }

    /// Time since `label` was started
    pub fn elapsed(&self, label: &str) -> LoggrResult<Duration> {
        self.started
            .get(label)
            .map(Instant::elapsed)
            .ok_or_else(|| LoggrError::unknown_timer(label))
    }

    /// Whether `label` has been started
    pub fn contains(&self, label: &str) -> bool {
        self.started.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

/// Resolve an optional label to the one actually used
pub fn label_or_default(label: Option<&str>) -> &str {
    label.unwrap_or(DEFAULT_TIMER_LABEL)
}
