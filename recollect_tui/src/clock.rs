//! The game clock: an owned periodic task driving timer ticks.

use crate::app::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Sends [`AppEvent::Tick`] at a fixed interval while running.
///
/// There is exactly one logical clock per app: `start` cancels any
/// previous task before spawning, so a restart can never leave a
/// second interval ticking against discarded state. The tick is only
/// a signal; whether it counts is decided by
/// [`recollect::GameState::tick`], which freezes once the game
/// completes.
pub struct Clock {
    interval: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Creates a stopped clock.
    pub fn new(interval: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            interval,
            event_tx,
            handle: None,
        }
    }

    /// Starts ticking, cancelling any previously started task.
    pub fn start(&mut self) {
        self.stop();
        debug!(interval_ms = self.interval.as_millis() as u64, "Starting clock");

        let tx = self.event_tx.clone();
        let period = self.interval;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval fires immediately;
            // the timer starts at zero, so skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stops the clock if it is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Stopping clock");
            handle.abort();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}
