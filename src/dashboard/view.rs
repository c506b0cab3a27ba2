//! View Renderer
//!
//! [`render`] is a pure function from the current state to the view tree
//! the frontend draws. It is re-run on every tick and every user event.

use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::cards::{stat_cards, StatCard, TrendMode};
use super::chart::{ChartBar, ChartPoint, PERIODS};
use super::ui::{ActiveTab, TimeRange, UiState};
use crate::metrics::MetricsUpdate;

pub const TITLE: &str = "Analytics Pro";
pub const SUBTITLE: &str = "Real-time insights";
pub const AVATAR: &str = "OD";
pub const CHART_TITLE: &str = "Revenue Overview";

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Tick of the snapshot this view was rendered from
    pub tick: u64,
    pub header: HeaderView,
    /// Absent while the sidebar is collapsed
    pub sidebar: Option<SidebarView>,
    pub stats: Vec<StatCard>,
    pub chart: ChartView,
    pub activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub avatar: String,
    /// The toggle shows a close icon while the sidebar is open
    pub sidebar_open: bool,
    pub time_range: TimeRange,
    pub time_ranges: Vec<TimeRangeOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRangeOption {
    pub id: TimeRange,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarView {
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: ActiveTab,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub title: String,
    pub periods: Vec<String>,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub initials: String,
    #[serde(flatten)]
    pub entry: ActivityEntry,
}

/// Render the dashboard
pub fn render(
    ui: &UiState,
    update: &MetricsUpdate,
    chart: &[ChartPoint],
    activity: &[ActivityEntry],
    trend_mode: TrendMode,
) -> DashboardView {
    DashboardView {
        tick: update.tick,
        header: render_header(ui),
        sidebar: ui.sidebar_open.then(|| render_sidebar(ui.active_tab)),
        stats: stat_cards(update, trend_mode),
        chart: ChartView {
            title: CHART_TITLE.to_string(),
            periods: PERIODS.iter().map(|p| p.to_string()).collect(),
            bars: chart.iter().map(ChartPoint::to_bar).collect(),
        },
        activity: activity
            .iter()
            .map(|entry| ActivityItem {
                initials: entry.initials(),
                entry: entry.clone(),
            })
            .collect(),
    }
}

fn render_header(ui: &UiState) -> HeaderView {
    HeaderView {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        avatar: AVATAR.to_string(),
        sidebar_open: ui.sidebar_open,
        time_range: ui.time_range,
        time_ranges: TimeRange::ALL
            .iter()
            .map(|range| TimeRangeOption {
                id: *range,
                label: range.label().to_string(),
            })
            .collect(),
    }
}

fn render_sidebar(active: ActiveTab) -> SidebarView {
    SidebarView {
        items: ActiveTab::ALL
            .iter()
            .map(|tab| NavItem {
                id: *tab,
                label: tab.label().to_string(),
                icon: tab.icon().to_string(),
                active: *tab == active,
            })
            .collect(),
    }
}
