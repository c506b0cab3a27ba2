//! Tick Sources
//!
//! What drives the simulator forward. Production uses a fixed-period
//! interval; tests either fast-forward tokio's clock or trigger ticks by hand.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::error::{SimulatorError, SimulatorResult};

/// Something that yields ticks
#[async_trait]
pub trait TickSource: Send {
    /// Wait for the next tick. Returns `None` once the source is exhausted.
    async fn next_tick(&mut self) -> Option<Instant>;
}

/// Fixed-period ticks. The first tick fires one full period after the
/// source is first polled, not immediately.
pub struct IntervalTicks {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> SimulatorResult<Self> {
        if period.is_zero() {
            return Err(SimulatorError::InvalidTickInterval);
        }

        Ok(Self {
            period,
            interval: None,
        })
    }

    /// Convenience constructor from milliseconds
    pub fn from_millis(millis: u64) -> SimulatorResult<Self> {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    async fn next_tick(&mut self) -> Option<Instant> {
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            // Catch up on missed ticks so the count always matches elapsed periods
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            interval
        });

        Some(interval.tick().await)
    }
}

/// Ticks fired explicitly through a [`TickTrigger`]
pub struct ManualTicks {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Sending half of [`ManualTicks`]
#[derive(Clone)]
pub struct TickTrigger {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualTicks {
    /// Create a trigger and its tick source
    pub fn channel() -> (TickTrigger, ManualTicks) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TickTrigger { tx }, ManualTicks { rx })
    }
}

impl TickTrigger {
    /// Fire one tick. Returns false if the source has been dropped.
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

#[async_trait]
impl TickSource for ManualTicks {
    async fn next_tick(&mut self) -> Option<Instant> {
        self.rx.recv().await.map(|_| Instant::now())
    }
}
