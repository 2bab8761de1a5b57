//! # Pomotimer Core Library
//!
//! This library provides the core logic for the Pomotimer focus/break
//! countdown timer. All behavior lives here; frontends (the CLI binary)
//! are thin layers that draw the view model and forward user input.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: a tick-driven state machine that requires the
//!   caller to invoke `tick()` once per elapsed second while running
//! - **Input Resolver**: turns free-form duration text into validated
//!   minute values; the only sanitization boundary in the system
//! - **View Model**: pure projection of engine state into banner, clock
//!   string, colors, and labels for a frontend to draw
//! - **Ticker**: cancellable one-second tick source on tokio
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core countdown state machine
//! - [`Durations`]: resolved focus/break minutes
//! - [`Screen`]: one drawable frame of the timer screen
//! - [`HapticFeedback`]: capability trait for the completion pulse

pub mod config;
pub mod error;
pub mod events;
pub mod haptics;
pub mod input;
pub mod ticker;
pub mod timer;
pub mod view;

pub use config::Config;
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use haptics::{HapticFeedback, NoopHaptics, COMPLETION_PULSE_MS};
pub use input::{resolve_break_minutes, resolve_focus_minutes, Durations};
pub use ticker::{Ticker, TICK_INTERVAL};
pub use timer::{TimerEngine, TimerMode};
pub use view::{format_clock, Banner, Screen};
