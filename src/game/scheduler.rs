//! Tick scheduling.
//!
//! A tick is armed once, after the previous one finished; the driver either
//! re-arms it or cancels it. Nothing here owns a clock, so tests can step the
//! game without waiting.

use std::time::Duration;

pub trait TickScheduler {
    /// Arm the next tick to fire after `after`.
    fn schedule(&mut self, after: Duration);

    /// Drop the armed tick, if any.
    fn cancel(&mut self);
}

/// Scheduler driven by hand: `fire` hands back the armed delay, if any.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub armed: Option<Duration>,
    pub history: Vec<Duration>,
    pub cancellations: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn fire(&mut self) -> Option<Duration> {
        self.armed.take()
    }
}

#[cfg(test)]
impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration) {
        assert!(self.armed.is_none(), "a tick is already armed");
        self.armed = Some(after);
        self.history.push(after);
    }

    fn cancel(&mut self) {
        self.armed = None;
        self.cancellations += 1;
    }
}
