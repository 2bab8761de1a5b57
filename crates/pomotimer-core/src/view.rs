//! Screen view model.
//!
//! Pure projection of engine state into what a frontend draws: banner,
//! zero-padded clock, mode color, labels. No rendering happens here;
//! frontends consume a [`Screen`] and draw it however they like.

use serde::{Deserialize, Serialize};

use crate::timer::{TimerEngine, TimerMode};

/// Countdown card color for Focus mode (warm red).
pub const FOCUS_COLOR: &str = "#E83944";
/// Countdown card color for Break mode (light blue).
pub const BREAK_COLOR: &str = "#81D4FA";

pub const FOCUS_FIELD_LABEL: &str = "Set Focus Time (min)";
pub const BREAK_FIELD_LABEL: &str = "Set Break Time (min)";

/// Banner shown above the countdown card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Banner {
    NotStarted,
    Focus,
    Break,
    Paused,
}

impl Banner {
    /// Select the banner for the given state.
    ///
    /// Precedence: not-started overrides everything; then running focus,
    /// running break; anything else is paused.
    pub fn select(mode: TimerMode, is_running: bool, has_started: bool) -> Self {
        if !has_started {
            Banner::NotStarted
        } else if is_running && mode == TimerMode::Focus {
            Banner::Focus
        } else if is_running && mode == TimerMode::Break {
            Banner::Break
        } else {
            Banner::Paused
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Banner::NotStarted => "POMOTIMER",
            Banner::Focus => "IT'S TIME TO FOCUS",
            Banner::Break => "GREAT, LET'S TAKE BREAK",
            Banner::Paused => "TIMER PAUSED",
        }
    }

    /// Secondary line, only present before the first start.
    pub fn subline(self) -> Option<&'static str> {
        match self {
            Banner::NotStarted => Some("START WORKING"),
            _ => None,
        }
    }
}

/// Zero-padded `MM:SS` clock string.
pub fn format_clock(remaining_secs: u32) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

pub fn mode_color(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Focus => FOCUS_COLOR,
        TimerMode::Break => BREAK_COLOR,
    }
}

/// One drawable frame of the timer screen.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub banner: Banner,
    pub clock: String,
    pub color: &'static str,
    /// The countdown card stays hidden until the first start.
    pub show_card: bool,
    pub sessions_line: String,
    pub start_pause_label: &'static str,
}

impl Screen {
    pub fn project(engine: &TimerEngine) -> Self {
        Self {
            banner: Banner::select(engine.mode(), engine.is_running(), engine.has_started()),
            clock: format_clock(engine.remaining_secs()),
            color: mode_color(engine.mode()),
            show_card: engine.has_started(),
            sessions_line: format!("Sessions Completed: {}", engine.sessions_completed()),
            start_pause_label: if engine.is_running() { "Pause" } else { "Start" },
        }
    }
}
