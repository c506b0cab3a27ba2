//! View Driver
//!
//! Runs one mounted dashboard: owns its [`DashboardSession`] and its
//! simulator, and pushes a freshly rendered view to the client after every
//! tick and every UI event. Unmounting (the inbound channel closing, or
//! the client going away) stops the simulator before the driver returns.

use tokio::sync::mpsc;

use super::hub::ConnectionId;
use super::messages::{ClientMessage, ServerMessage};
use crate::config::SimulatorConfig;
use crate::dashboard::DashboardSession;
use crate::metrics::{
    IntervalTicks, MetricsSimulator, MetricsSnapshot, MetricsUpdate, SimulatorHandle,
    SimulatorResult, StdRandom,
};

/// Drives a single dashboard view
pub struct ViewDriver {
    connection_id: ConnectionId,
    session: DashboardSession,
    simulator: SimulatorHandle,
    outbound: mpsc::UnboundedSender<ServerMessage>,
}

impl ViewDriver {
    /// Mount a view with a wall-clock simulator built from `config`.
    ///
    /// The chart is drawn from the same random source the simulator then
    /// keeps, so a fixed seed reproduces the whole view.
    pub fn start(
        connection_id: ConnectionId,
        config: &SimulatorConfig,
        outbound: mpsc::UnboundedSender<ServerMessage>,
    ) -> SimulatorResult<Self> {
        let mut random = StdRandom::from_seed_option(config.seed);
        let session = DashboardSession::new(&mut random, config.trend_mode);
        let ticks = IntervalTicks::new(config.tick_interval())?;
        let simulator = MetricsSimulator::new(config.initial, Box::new(random))?.spawn(ticks);

        Ok(Self::new(connection_id, session, simulator, outbound))
    }

    /// Assemble a driver from already running parts
    pub fn new(
        connection_id: ConnectionId,
        session: DashboardSession,
        simulator: SimulatorHandle,
        outbound: mpsc::UnboundedSender<ServerMessage>,
    ) -> Self {
        Self {
            connection_id,
            session,
            simulator,
            outbound,
        }
    }

    /// Serve the view until unmounted. Returns the final KPI snapshot.
    pub async fn run(mut self, mut inbound: mpsc::UnboundedReceiver<ClientMessage>) -> MetricsSnapshot {
        let mut updates = self.simulator.subscribe();
        let mut latest = updates.borrow_and_update().clone();

        tracing::debug!(connection_id = %self.connection_id, "View mounted");

        if self.push_view(&latest) {
            loop {
                let keep_going = tokio::select! {
                    changed = updates.changed() => match changed {
                        Ok(()) => {
                            latest = updates.borrow_and_update().clone();
                            self.push_view(&latest)
                        }
                        Err(_) => false,
                    },
                    message = inbound.recv() => match message {
                        Some(message) => self.handle_message(message, &latest),
                        None => false,
                    },
                    _ = self.outbound.closed() => false,
                };

                if !keep_going {
                    break;
                }
            }
        }

        let snapshot = self.simulator.stop().await;
        tracing::debug!(
            connection_id = %self.connection_id,
            revenue = snapshot.revenue,
            "View unmounted"
        );
        snapshot
    }

    /// Returns false once the client can no longer be reached
    fn handle_message(&mut self, message: ClientMessage, latest: &MetricsUpdate) -> bool {
        match message.ui_event() {
            Some(event) => {
                self.session.apply(event);
                self.push_view(latest)
            }
            None => self.outbound.send(ServerMessage::Pong).is_ok(),
        }
    }

    fn push_view(&self, update: &MetricsUpdate) -> bool {
        let view = self.session.render(update);
        self.outbound.send(ServerMessage::view(view)).is_ok()
    }
}
