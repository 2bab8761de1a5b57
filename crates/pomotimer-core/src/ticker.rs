//! One-second tick source.
//!
//! Cancel-and-restart semantics: toggling the timer off and back on
//! begins a fresh wait cycle, never a resumption mid-interval. The first
//! second after a restart may therefore run slightly short of a full
//! second, which is acceptable drift for a foreground timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Cancellable periodic tick source.
///
/// `start` spawns a task that sends one unit per interval on the
/// returned channel; `cancel` aborts it. The receiver closing also stops
/// the task, and dropping the ticker cancels it.
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// (Re)start the ticker. Any previous cycle is cancelled first.
    pub fn start(&mut self, interval: Duration) -> mpsc::Receiver<()> {
        self.cancel();
        let (tx, rx) = mpsc::channel(1);
        self.handle = Some(tokio::spawn(async move {
            let mut clock = tokio::time::interval(interval);
            clock.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // interval fires immediately; swallow the zeroth tick.
            clock.tick().await;
            loop {
                clock.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        }));
        rx
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
