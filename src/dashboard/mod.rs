//! Dashboard Model
//!
//! Everything between the KPI feed and the pixels:
//!
//! - **ui**: Tab, time range and sidebar state machine
//! - **format**: Currency, count and percentage formatting
//! - **cards**: KPI cards and trend badges
//! - **chart**: Monthly revenue bars
//! - **activity**: Recent activity fixtures
//! - **view**: The pure renderer producing [`DashboardView`]
//! - **session**: Per-view state tying the above together

pub mod activity;
pub mod cards;
pub mod chart;
pub mod format;
pub mod session;
pub mod ui;
pub mod view;

pub use activity::{recent_activity, ActivityEntry};
pub use cards::{stat_cards, StatCard, Trend, TrendMode};
pub use chart::{generate_chart, ChartBar, ChartPoint};
pub use session::DashboardSession;
pub use ui::{ActiveTab, ParseError, TimeRange, UiEvent, UiState};
pub use view::{render, ActivityItem, DashboardView};
