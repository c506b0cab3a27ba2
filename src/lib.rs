//! # Pulseboard
//!
//! Live analytics dashboard server. Every connected dashboard gets its own
//! simulated KPI feed (revenue, active users, orders, conversion rate) that
//! random-walks on a fixed interval, and the server pushes a fully rendered
//! view to the browser after every tick and every user interaction.
//!
//! ## Modules
//!
//! - [`metrics`]: KPI snapshot, random walk and tick-driven simulator
//! - [`dashboard`]: UI state machine, formatting, chart data and the view renderer
//! - [`websocket`]: Live dashboard sessions over WebSocket
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`telemetry`]: Logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulseboard::dashboard::{DashboardSession, TrendMode, UiEvent};
//! use pulseboard::metrics::{MetricsSimulator, MetricsSnapshot, StdRandom};
//!
//! let mut random = StdRandom::seeded(42);
//! let mut session = DashboardSession::new(&mut random, TrendMode::Static);
//! let mut simulator = MetricsSimulator::new(MetricsSnapshot::default(), Box::new(random))?;
//!
//! let update = simulator.tick();
//! session.apply(UiEvent::ToggleSidebar);
//!
//! let view = session.render(&update);
//! println!("{} = {}", view.stats[0].label, view.stats[0].value);
//! # Ok::<(), pulseboard::metrics::SimulatorError>(())
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod metrics;
pub mod telemetry;
pub mod websocket;

// Re-export top-level types for convenience
pub use metrics::{
    MetricsSimulator, MetricsSnapshot, MetricsUpdate, SimulatorError, SimulatorHandle,
    SimulatorResult,
};

pub use dashboard::{
    render, ActiveTab, DashboardSession, DashboardView, TimeRange, TrendMode, UiEvent, UiState,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage,
    ViewDriver,
};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SimulatorConfig};
