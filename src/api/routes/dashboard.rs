//! Dashboard Routes
//!
//! One-off snapshots of the dashboard for clients that do not hold a live
//! session (the CLI, scripts, curl).
//!
//! - GET /api/v1/dashboard - Rendered view at tick 0
//! - GET /api/v1/activity - Recent activity feed
//! - GET /api/v1/config - Effective simulator settings

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::DashboardQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::config::SimulatorConfig;
use crate::dashboard::{recent_activity, ActivityItem, DashboardSession, DashboardView};
use crate::metrics::{MetricsSimulator, MetricsUpdate, StdRandom};

/// GET /api/v1/dashboard
///
/// Renders the configured initial snapshot with a freshly drawn chart.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardView>> {
    let ui = query.ui_state()?;
    let settings = &state.config.simulator;

    let mut random = StdRandom::from_seed_option(settings.seed);
    let session = DashboardSession::new(&mut random, settings.trend_mode).with_ui(ui);
    let simulator = MetricsSimulator::new(settings.initial, Box::new(random))?;

    let view = session.render(&MetricsUpdate::initial(simulator.snapshot()));
    tracing::debug!(tab = %ui.active_tab, range = %ui.time_range, "Rendered dashboard snapshot");

    Ok(Json(view))
}

/// GET /api/v1/activity
pub async fn get_activity() -> Json<Vec<ActivityItem>> {
    let items = recent_activity()
        .into_iter()
        .map(|entry| ActivityItem {
            initials: entry.initials(),
            entry,
        })
        .collect();
    Json(items)
}

/// GET /api/v1/config
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SimulatorConfig> {
    Json(state.config.simulator.clone())
}
