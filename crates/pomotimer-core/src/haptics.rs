//! Haptic feedback capability.
//!
//! The pulse is fire-and-forget: no return value, no retry. Hosts
//! without vibration support plug in [`NoopHaptics`] and the feature
//! degrades silently.

/// Pulse length requested on interval completion, in milliseconds.
pub const COMPLETION_PULSE_MS: u64 = 500;

pub trait HapticFeedback {
    /// Request a single vibration pulse. Must not block or fail.
    fn pulse(&self, duration_ms: u64);
}

/// Silent fallback for platforms and tests without vibration support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn pulse(&self, _duration_ms: u64) {}
}
