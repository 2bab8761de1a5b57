//! Integration tests for the countdown lifecycle.
//!
//! Drives the engine through full focus/break cycles the way a frontend
//! would: resolve input text, toggle, tick once per second, pulse
//! haptics on completion, and project the screen after every change.

use std::cell::RefCell;

use pomotimer_core::{
    Banner, Durations, Event, HapticFeedback, Screen, TimerEngine, TimerMode, COMPLETION_PULSE_MS,
};

struct RecordingHaptics {
    pulses: RefCell<Vec<u64>>,
}

impl RecordingHaptics {
    fn new() -> Self {
        Self {
            pulses: RefCell::new(Vec::new()),
        }
    }

    fn count(&self) -> usize {
        self.pulses.borrow().len()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn pulse(&self, duration_ms: u64) {
        self.pulses.borrow_mut().push(duration_ms);
    }
}

/// Tick until the current period completes, pulsing on completion.
fn run_period(engine: &mut TimerEngine, haptics: &dyn HapticFeedback) -> Event {
    for _ in 0..engine.total_secs() + 1 {
        if let Some(event) = engine.tick() {
            haptics.pulse(COMPLETION_PULSE_MS);
            return event;
        }
    }
    panic!("period never completed");
}

#[test]
fn full_cycle_counts_one_session_and_pulses_twice() {
    let haptics = RecordingHaptics::new();
    let mut engine = TimerEngine::new(Durations::resolve("2", "1"));

    // Focus period: 2 minutes.
    engine.toggle();
    let completed = run_period(&mut engine, &haptics);
    match completed {
        Event::IntervalCompleted {
            completed_mode,
            next_mode,
            next_duration_secs,
            sessions_completed,
            ..
        } => {
            assert_eq!(completed_mode, TimerMode::Focus);
            assert_eq!(next_mode, TimerMode::Break);
            assert_eq!(next_duration_secs, 60);
            assert_eq!(sessions_completed, 0);
        }
        other => panic!("expected IntervalCompleted, got {other:?}"),
    }
    assert!(!engine.is_running());
    assert_eq!(haptics.count(), 1);

    // Break period: 1 minute. Completing it closes the cycle.
    engine.toggle();
    let completed = run_period(&mut engine, &haptics);
    match completed {
        Event::IntervalCompleted {
            next_mode,
            sessions_completed,
            ..
        } => {
            assert_eq!(next_mode, TimerMode::Focus);
            assert_eq!(sessions_completed, 1);
        }
        other => panic!("expected IntervalCompleted, got {other:?}"),
    }
    assert_eq!(engine.sessions_completed(), 1);
    assert_eq!(engine.remaining_secs(), 2 * 60);
    assert_eq!(haptics.count(), 2);
}

#[test]
fn screen_follows_the_cycle() {
    let mut engine = TimerEngine::new(Durations::resolve("1", "1"));

    let screen = Screen::project(&engine);
    assert_eq!(screen.banner, Banner::NotStarted);
    assert!(!screen.show_card);

    engine.toggle();
    engine.tick();
    let screen = Screen::project(&engine);
    assert_eq!(screen.banner, Banner::Focus);
    assert_eq!(screen.clock, "00:59");
    assert_eq!(screen.start_pause_label, "Pause");

    // Pause mid-period.
    engine.toggle();
    let screen = Screen::project(&engine);
    assert_eq!(screen.banner, Banner::Paused);
    assert_eq!(screen.start_pause_label, "Start");

    // Finish the focus period; the stopped engine shows the break screen
    // as paused, with the full break duration loaded.
    engine.toggle();
    run_period(&mut engine, &pomotimer_core::NoopHaptics);
    let screen = Screen::project(&engine);
    assert_eq!(screen.banner, Banner::Paused);
    assert_eq!(screen.clock, "01:00");
    assert_eq!(screen.color, pomotimer_core::view::BREAK_COLOR);
}

#[test]
fn resolver_feeds_reset_calculations() {
    let mut engine = TimerEngine::new(Durations::resolve("abc", "xyz"));
    assert_eq!(engine.remaining_secs(), 25 * 60);

    // Free-form edits re-resolve and refill while stopped.
    engine.set_durations(Durations::resolve("1", "whatever"));
    assert_eq!(engine.remaining_secs(), 60);
    assert_eq!(engine.durations().break_min, 1);

    engine.toggle();
    engine.tick();
    engine.reset();
    assert_eq!(engine.remaining_secs(), 60);
}

#[test]
fn engine_state_round_trips_through_json() {
    let mut engine = TimerEngine::new(Durations::resolve("2", "1"));
    engine.toggle();
    engine.tick();
    engine.tick();

    let json = serde_json::to_string(&engine).unwrap();
    let restored: TimerEngine = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.remaining_secs(), engine.remaining_secs());
    assert_eq!(restored.mode(), engine.mode());
    assert_eq!(restored.is_running(), engine.is_running());
    assert_eq!(restored.sessions_completed(), engine.sessions_completed());
}
