//! Duration input resolution.
//!
//! Raw text from the two duration fields is the only untrusted input in
//! the system. Resolution is pure: unparseable text substitutes the
//! default, parseable text clamps into range, and the result is always
//! valid. Invalid input never escapes this module.
//!
//! The break cap depends on the resolved focus value: a break must be
//! strictly shorter than the focus period, except when focus is 1 minute
//! (the cap floors at 1).

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const MIN_MINUTES: u32 = 1;
pub const MAX_FOCUS_MINUTES: u32 = 90;

/// Validated focus/break durations in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub focus_min: u32,
    pub break_min: u32,
}

impl Durations {
    /// Resolve raw field text into validated minutes.
    ///
    /// Focus is resolved first; the break cap derives from it.
    pub fn resolve(focus_text: &str, break_text: &str) -> Self {
        let focus_min = resolve_focus_minutes(focus_text);
        let break_min = resolve_break_minutes(break_text, focus_min);
        Self {
            focus_min,
            break_min,
        }
    }

    pub fn focus_secs(&self) -> u32 {
        self.focus_min * 60
    }

    pub fn break_secs(&self) -> u32 {
        self.break_min * 60
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_min: DEFAULT_FOCUS_MINUTES,
            break_min: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// Longest break allowed for the given focus duration.
pub fn max_break_minutes(focus_min: u32) -> u32 {
    focus_min.saturating_sub(1).max(MIN_MINUTES)
}

/// Resolve focus field text to minutes in `[1, 90]`.
///
/// Unparseable text substitutes the default (25); parseable values clamp.
pub fn resolve_focus_minutes(text: &str) -> u32 {
    let parsed = text
        .trim()
        .parse::<i64>()
        .unwrap_or(DEFAULT_FOCUS_MINUTES as i64);
    parsed.clamp(MIN_MINUTES as i64, MAX_FOCUS_MINUTES as i64) as u32
}

/// Resolve break field text to minutes in `[1, max_break_minutes(focus)]`.
///
/// Unparseable text substitutes the default (5). The default is clamped
/// like any other value, so the result always respects the focus cap.
pub fn resolve_break_minutes(text: &str, focus_min: u32) -> u32 {
    let parsed = text
        .trim()
        .parse::<i64>()
        .unwrap_or(DEFAULT_BREAK_MINUTES as i64);
    parsed.clamp(MIN_MINUTES as i64, max_break_minutes(focus_min) as i64) as u32
}
