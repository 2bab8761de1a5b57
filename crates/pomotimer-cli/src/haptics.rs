//! Terminal stand-in for the platform vibration pulse.

use std::io::Write;

use pomotimer_core::HapticFeedback;

/// Rings the terminal bell once per pulse.
///
/// Terminals without a bell ignore BEL, which keeps the
/// degrade-silently contract of the haptics capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl HapticFeedback for TerminalBell {
    fn pulse(&self, _duration_ms: u64) {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}
