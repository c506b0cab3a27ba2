//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! The dashboard itself is served as [`DashboardView`](crate::dashboard::DashboardView).

use serde::{Deserialize, Serialize};

use crate::dashboard::{ActiveTab, TimeRange, UiState};

use super::error::{ApiError, ApiResult};

/// Query parameters for `GET /api/v1/dashboard`
///
/// Kept as strings so bad values surface as `VALIDATION_ERROR` rather than
/// a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Active tab id (`overview`, `analytics`, `reports`)
    pub tab: Option<String>,
    /// Time range id (`24h`, `7d`, `30d`, `90d`)
    pub range: Option<String>,
    /// Whether the sidebar is open
    pub sidebar: Option<String>,
}

impl DashboardQuery {
    /// Build the UI state these parameters select
    pub fn ui_state(&self) -> ApiResult<UiState> {
        let mut ui = UiState::default();

        if let Some(tab) = &self.tab {
            ui.active_tab = tab.parse::<ActiveTab>()?;
        }
        if let Some(range) = &self.range {
            ui.time_range = range.parse::<TimeRange>()?;
        }
        if let Some(sidebar) = &self.sidebar {
            ui.sidebar_open = sidebar.parse::<bool>().map_err(|_| {
                ApiError::Validation(format!("sidebar must be true or false, got '{}'", sidebar))
            })?;
        }

        Ok(ui)
    }
}

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Currently mounted dashboard views
    pub active_views: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
