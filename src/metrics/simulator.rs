//! Metrics Simulator
//!
//! Owns the live [`MetricsSnapshot`] of one dashboard view and moves it
//! forward on every tick. Subscribers observe updates through a
//! `tokio::sync::watch` channel, so a slow reader only ever sees the latest
//! snapshot.
//!
//! ```text
//! TickSource ──tick──> MetricsSimulator ──watch──> session driver ──> view
//!                         ^
//!                   RandomSource
//! ```

use serde::Serialize;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use super::error::{SimulatorError, SimulatorResult};
use super::random::RandomSource;
use super::snapshot::{MetricsSnapshot, CONVERSION_MAX, CONVERSION_MIN};
use super::ticker::TickSource;

/// One published state of the simulator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsUpdate {
    /// Number of ticks applied so far (0 for the initial snapshot)
    pub tick: u64,
    /// Current values
    pub snapshot: MetricsSnapshot,
    /// Values before the latest tick
    pub previous: Option<MetricsSnapshot>,
}

impl MetricsUpdate {
    /// Update describing a freshly seeded snapshot
    pub fn initial(snapshot: MetricsSnapshot) -> Self {
        Self {
            tick: 0,
            snapshot,
            previous: None,
        }
    }
}

/// State holder for one view's KPI feed
pub struct MetricsSimulator {
    snapshot: MetricsSnapshot,
    random: Box<dyn RandomSource>,
    ticks: u64,
    publisher: watch::Sender<MetricsUpdate>,
}

impl MetricsSimulator {
    /// Create a simulator seeded with `initial`.
    ///
    /// Rejects a conversion rate that is non-finite or outside [0, 10].
    pub fn new(initial: MetricsSnapshot, random: Box<dyn RandomSource>) -> SimulatorResult<Self> {
        validate_snapshot(&initial)?;

        let (publisher, _) = watch::channel(MetricsUpdate::initial(initial));

        Ok(Self {
            snapshot: initial,
            random,
            ticks: 0,
            publisher,
        })
    }

    /// Current snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.snapshot
    }

    /// Ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Subscribe to published updates
    pub fn subscribe(&self) -> watch::Receiver<MetricsUpdate> {
        self.publisher.subscribe()
    }

    /// Apply one random-walk step and publish the result
    pub fn tick(&mut self) -> MetricsUpdate {
        let previous = self.snapshot;
        self.snapshot = previous.step(self.random.as_mut());
        self.ticks += 1;

        let update = MetricsUpdate {
            tick: self.ticks,
            snapshot: self.snapshot,
            previous: Some(previous),
        };

        tracing::trace!(
            tick = update.tick,
            revenue = update.snapshot.revenue,
            active_users = update.snapshot.active_users,
            orders = update.snapshot.orders,
            conversion_rate = update.snapshot.conversion_rate,
            "Simulator tick"
        );

        self.publisher.send_replace(update.clone());
        update
    }

    /// Run the tick loop on a background task until stopped.
    pub fn spawn<T>(self, ticks: T) -> SimulatorHandle
    where
        T: TickSource + 'static,
    {
        let updates = self.subscribe();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(ticks, cancel_rx));

        SimulatorHandle {
            updates,
            cancel: Some(cancel_tx),
            task: Some(task),
        }
    }

    async fn run<T: TickSource>(
        mut self,
        mut ticks: T,
        mut cancel: oneshot::Receiver<()>,
    ) -> MetricsSnapshot {
        tracing::debug!("Simulator started");

        loop {
            tokio::select! {
                biased;
                _ = &mut cancel => break,
                tick = ticks.next_tick() => match tick {
                    Some(_) => {
                        self.tick();
                    }
                    None => break,
                },
            }
        }

        tracing::debug!(ticks = self.ticks, "Simulator stopped");
        self.snapshot
    }
}

/// Handle to a running simulator.
///
/// Dropping the handle aborts the tick loop.
pub struct SimulatorHandle {
    updates: watch::Receiver<MetricsUpdate>,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<MetricsSnapshot>>,
}

impl SimulatorHandle {
    /// Subscribe to published updates
    pub fn subscribe(&self) -> watch::Receiver<MetricsUpdate> {
        self.updates.clone()
    }

    /// Most recently published update
    pub fn latest(&self) -> MetricsUpdate {
        self.updates.borrow().clone()
    }

    /// Stop the tick loop and wait for it to exit.
    ///
    /// No tick is applied after this returns. Yields the final snapshot.
    pub async fn stop(mut self) -> MetricsSnapshot {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }

        let last_published = self.updates.borrow().snapshot;
        match self.task.take() {
            Some(task) => task.await.unwrap_or(last_published),
            None => last_published,
        }
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn validate_snapshot(snapshot: &MetricsSnapshot) -> SimulatorResult<()> {
    let rate = snapshot.conversion_rate;
    if !rate.is_finite() || !(CONVERSION_MIN..=CONVERSION_MAX).contains(&rate) {
        return Err(SimulatorError::InvalidSnapshot(format!(
            "conversion_rate {} outside [{}, {}]",
            rate, CONVERSION_MIN, CONVERSION_MAX
        )));
    }
    Ok(())
}
