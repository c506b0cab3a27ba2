//! Navigation and Filter State
//!
//! The three pieces of UI state a user can change: selected tab, selected
//! time range, and sidebar visibility. Every transition is a plain
//! assignment or toggle; none of them touch the KPI feed, the chart or the
//! activity list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sidebar navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Overview,
    Analytics,
    Reports,
}

impl ActiveTab {
    /// All tabs in sidebar order
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Overview, ActiveTab::Analytics, ActiveTab::Reports];

    /// Wire id
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Overview => "overview",
            ActiveTab::Analytics => "analytics",
            ActiveTab::Reports => "reports",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Overview => "Overview",
            ActiveTab::Analytics => "Analytics",
            ActiveTab::Reports => "Reports",
        }
    }

    /// Icon name shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            ActiveTab::Overview => "bar-chart",
            ActiveTab::Analytics => "activity",
            ActiveTab::Reports => "pie-chart",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(ActiveTab::Overview),
            "analytics" => Ok(ActiveTab::Analytics),
            "reports" => Ok(ActiveTab::Reports),
            other => Err(ParseError::UnknownTab(other.to_string())),
        }
    }
}

/// Reporting window selected in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl TimeRange {
    /// All ranges in selector order
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
    ];

    /// Wire id
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
        }
    }

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 90 days",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            "90d" => Ok(TimeRange::Last90Days),
            other => Err(ParseError::UnknownTimeRange(other.to_string())),
        }
    }
}

/// Failed to parse a tab or time range id
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unknown tab '{0}' (expected overview, analytics or reports)")]
    UnknownTab(String),

    #[error("Unknown time range '{0}' (expected 24h, 7d, 30d or 90d)")]
    UnknownTimeRange(String),
}

/// A user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SelectTab(ActiveTab),
    ToggleSidebar,
    SetTimeRange(TimeRange),
}

/// Current navigation and filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub time_range: TimeRange,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Overview,
            time_range: TimeRange::Last7Days,
            sidebar_open: true,
        }
    }
}

impl UiState {
    /// Apply an event. Returns true if the state changed.
    pub fn apply(&mut self, event: UiEvent) -> bool {
        let before = *self;

        match event {
            UiEvent::SelectTab(tab) => self.active_tab = tab,
            UiEvent::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            UiEvent::SetTimeRange(range) => self.time_range = range,
        }

        *self != before
    }
}
