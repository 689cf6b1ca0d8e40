//! Cooking clock
//!
//! The sequencer counts whole seconds, so the cook loop ticks it once
//! per [`TICK_PERIOD`]. Starting or resuming a countdown re-arms the
//! ticker, so the first second after `t` is always a full one.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// One sequencer tick per second
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source owned by the cook loop
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    /// First tick one `period` from now
    pub fn every(period: Duration) -> Self {
        let mut interval = time::interval_at(Instant::now() + period, period);
        // A stalled loop still gets one tick per elapsed period
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        Self { interval }
    }

    /// Wait for the next tick
    pub async fn next(&mut self) {
        self.interval.tick().await;
    }

    /// Restart the period from now
    pub fn rearm(&mut self) {
        self.interval.reset();
    }
}
