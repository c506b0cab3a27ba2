//! Dashboard View Model
//!
//! Client-side mirror of the view the server renders. Only the fields the
//! components draw are declared; anything else in the payload is ignored.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DashboardView {
    pub tick: u64,
    pub header: HeaderView,
    #[serde(default)]
    pub sidebar: Option<SidebarView>,
    pub stats: Vec<StatCard>,
    pub chart: ChartView,
    pub activity: Vec<ActivityItem>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub avatar: String,
    pub sidebar_open: bool,
    pub time_range: String,
    pub time_ranges: Vec<TimeRangeOption>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TimeRangeOption {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SidebarView {
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    pub value: String,
    pub trend: Trend,
    pub change: String,
    pub icon: String,
    pub accent: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub periods: Vec<String>,
    pub bars: Vec<ChartBar>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChartBar {
    pub month: String,
    pub height_percent: i64,
    pub tooltip: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub initials: String,
    pub user: String,
    pub action: String,
    #[serde(default)]
    pub amount: Option<String>,
    pub time: String,
}

/// Emoji stand-ins for the icon names the server sends
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "dollar-sign" => "💲",
        "users" => "👥",
        "shopping-cart" => "🛒",
        "activity" => "📈",
        "bar-chart" => "📊",
        "pie-chart" => "🥧",
        _ => "•",
    }
}
