//! Simulated KPI Feed
//!
//! This module produces the "live" numbers behind the dashboard:
//!
//! - **snapshot**: The four KPIs and the random-walk step
//! - **random**: Injectable random sources (OS-seeded, fixed seed, scripted)
//! - **ticker**: Injectable tick sources (fixed interval, manual)
//! - **simulator**: State holder that ticks and publishes snapshots
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use pulseboard::metrics::{IntervalTicks, MetricsSimulator, MetricsSnapshot, StdRandom};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let simulator = MetricsSimulator::new(
//!         MetricsSnapshot::default(),
//!         Box::new(StdRandom::from_os()),
//!     )?;
//!     let handle = simulator.spawn(IntervalTicks::from_millis(3000)?);
//!
//!     let mut updates = handle.subscribe();
//!     updates.changed().await?;
//!     println!("tick {}: {:?}", updates.borrow().tick, updates.borrow().snapshot);
//!
//!     handle.stop().await;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod random;
pub mod simulator;
pub mod snapshot;
pub mod ticker;

pub use error::{SimulatorError, SimulatorResult};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use simulator::{MetricsSimulator, MetricsUpdate, SimulatorHandle};
pub use snapshot::{clamp_conversion, MetricsSnapshot};
pub use ticker::{IntervalTicks, ManualTicks, TickSource, TickTrigger};
