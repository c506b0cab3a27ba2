//! Dashboard Session
//!
//! Per-view state other than the KPI feed: UI selections, the session's chart
//! and the activity list. The KPI feed lives in the view's own
//! [`MetricsSimulator`](crate::metrics::MetricsSimulator).

use super::activity::{recent_activity, ActivityEntry};
use super::cards::TrendMode;
use super::chart::{generate_chart, ChartPoint};
use super::ui::{UiEvent, UiState};
use super::view::{render, DashboardView};
use crate::metrics::{MetricsUpdate, RandomSource};

/// State of one mounted dashboard
#[derive(Debug, Clone)]
pub struct DashboardSession {
    ui: UiState,
    chart: Vec<ChartPoint>,
    activity: Vec<ActivityEntry>,
    trend_mode: TrendMode,
}

impl DashboardSession {
    /// Start a session. The chart is drawn here, once.
    pub fn new(random: &mut dyn RandomSource, trend_mode: TrendMode) -> Self {
        Self {
            ui: UiState::default(),
            chart: generate_chart(random),
            activity: recent_activity(),
            trend_mode,
        }
    }

    /// Replace the starting UI state
    pub fn with_ui(mut self, ui: UiState) -> Self {
        self.ui = ui;
        self
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn chart(&self) -> &[ChartPoint] {
        &self.chart
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn trend_mode(&self) -> TrendMode {
        self.trend_mode
    }

    /// Apply a user event. Only the UI state changes.
    pub fn apply(&mut self, event: UiEvent) -> bool {
        let changed = self.ui.apply(event);
        tracing::debug!(event = ?event, changed, ui = ?self.ui, "UI event applied");
        changed
    }

    /// Render the view for a KPI update
    pub fn render(&self, update: &MetricsUpdate) -> DashboardView {
        render(&self.ui, update, &self.chart, &self.activity, self.trend_mode)
    }
}
