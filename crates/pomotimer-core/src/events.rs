use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

/// Every state change in the engine produces an Event.
/// Frontends poll snapshots; drivers react to completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Resolved durations changed; remaining time was refilled for the
    /// current mode (only emitted while stopped).
    DurationsChanged {
        focus_min: u32,
        break_min: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A countdown period reached zero while running.
    IntervalCompleted {
        completed_mode: TimerMode,
        next_mode: TimerMode,
        next_duration_secs: u32,
        sessions_completed: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        remaining_secs: u32,
        total_secs: u32,
        is_running: bool,
        has_started: bool,
        sessions_completed: u32,
        at: DateTime<Utc>,
    },
}
