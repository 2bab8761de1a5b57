//! Countdown timer domain.

mod engine;

pub use engine::{TimerEngine, TimerMode};
