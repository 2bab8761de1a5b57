//! Countdown engine implementation.
//!
//! The engine is a tick-driven state machine. It does not own a clock -
//! the caller calls `tick()` once per elapsed second while running
//! (see [`crate::ticker::Ticker`]).
//!
//! ## State Transitions
//!
//! ```text
//! Stopped <-> Running, with Focus/Break mode orthogonal
//! ```
//!
//! A period completing at zero stops the engine, flips the mode, and
//! refills the counter from the new mode's duration. Sessions count on
//! the flip back to Focus, so one focus+break cycle is one session.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Durations::default());
//! engine.toggle();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::IntervalCompleted) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::input::Durations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn flipped(self) -> Self {
        match self {
            TimerMode::Focus => TimerMode::Break,
            TimerMode::Break => TimerMode::Focus,
        }
    }

    /// Full duration of this mode in seconds under the given settings.
    pub fn duration_secs(self, durations: Durations) -> u32 {
        match self {
            TimerMode::Focus => durations.focus_secs(),
            TimerMode::Break => durations.break_secs(),
        }
    }
}

/// Core countdown engine.
///
/// Holds the whole session state. Mutated only through the command
/// methods below; each returns the event it produced, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    durations: Durations,
    mode: TimerMode,
    /// Remaining time in seconds for the current period.
    remaining_secs: u32,
    is_running: bool,
    /// Whether Start has ever been pressed this session.
    #[serde(default)]
    has_started: bool,
    sessions_completed: u32,
}

impl TimerEngine {
    /// Create a new engine in Focus mode, stopped, with a full counter.
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            mode: TimerMode::Focus,
            remaining_secs: durations.focus_secs(),
            is_running: false,
            has_started: false,
            sessions_completed: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Full duration of the current period in seconds.
    pub fn total_secs(&self) -> u32 {
        self.mode.duration_secs(self.durations)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            is_running: self.is_running,
            has_started: self.has_started,
            sessions_completed: self.sessions_completed,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start/Pause toggle (the single button in the UI).
    ///
    /// Starting from a drained counter refills it for the current mode
    /// first, so Start never begins a zero-length countdown.
    pub fn toggle(&mut self) -> Event {
        if !self.is_running && self.remaining_secs == 0 {
            self.remaining_secs = self.total_secs();
        }
        self.has_started = true;
        self.is_running = !self.is_running;
        if self.is_running {
            Event::TimerStarted {
                mode: self.mode,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        }
    }

    /// Stop and refill the counter for the current mode.
    ///
    /// Mode and session counter survive a reset.
    pub fn reset(&mut self) -> Event {
        self.is_running = false;
        self.remaining_secs = self.total_secs();
        Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// React to a change in resolved durations.
    ///
    /// While stopped, the counter refills for the current mode so the
    /// display reflects the new setting immediately. While running, the
    /// countdown continues; the counter is only clamped to the new cap
    /// so it never exceeds the current mode's full duration.
    pub fn set_durations(&mut self, durations: Durations) -> Option<Event> {
        let unchanged = durations == self.durations;
        self.durations = durations;
        if self.is_running {
            self.remaining_secs = self.remaining_secs.min(self.total_secs());
            return None;
        }
        if unchanged {
            return None;
        }
        self.remaining_secs = self.total_secs();
        Some(Event::DurationsChanged {
            focus_min: durations.focus_min,
            break_min: durations.break_min,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Call once per elapsed second while running. Returns
    /// `Some(Event::IntervalCompleted)` when the period finishes, `None`
    /// otherwise. A completed period stops the engine; the caller
    /// decides when the next one starts.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        self.is_running = false;
        let completed_mode = self.mode;
        self.mode = self.mode.flipped();
        if self.mode == TimerMode::Focus {
            // A full focus+break cycle counts as one session.
            self.sessions_completed += 1;
        }
        self.remaining_secs = self.total_secs();
        Some(Event::IntervalCompleted {
            completed_mode,
            next_mode: self.mode,
            next_duration_secs: self.remaining_secs,
            sessions_completed: self.sessions_completed,
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
