//! UI Components
//!
//! Leptos components for the dashboard.

pub mod activity_feed;
pub mod header;
pub mod loading;
pub mod revenue_chart;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use activity_feed::ActivityFeed;
pub use header::Header;
pub use loading::{CardSkeleton, Loading};
pub use revenue_chart::RevenueChart;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use toast::Toast;
