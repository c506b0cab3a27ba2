//! KPI Cards
//!
//! Derives the four stat cards from a [`MetricsUpdate`]. Values are always
//! formatted from the live snapshot. Trend arrows and change labels come
//! from [`TrendMode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::format::{format_change, format_count, format_currency, format_percentage};
use crate::metrics::{MetricsSnapshot, MetricsUpdate};

/// Direction of a card's trend badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

/// Where trend badges come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMode {
    /// Fixed per-card labels, unrelated to the feed's movement
    #[default]
    Static,
    /// Computed from the change since the previous tick
    Derived,
}

impl fmt::Display for TrendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendMode::Static => f.write_str("static"),
            TrendMode::Derived => f.write_str("derived"),
        }
    }
}

impl FromStr for TrendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(TrendMode::Static),
            "derived" => Ok(TrendMode::Derived),
            other => Err(format!("unknown trend mode '{}' (expected static or derived)", other)),
        }
    }
}

/// One rendered KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    pub value: String,
    pub trend: Trend,
    pub change: String,
    pub icon: String,
    pub accent: String,
}

/// The four KPIs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kpi {
    Revenue,
    Users,
    Orders,
    Conversion,
}

struct CardFixture {
    kpi: Kpi,
    id: &'static str,
    label: &'static str,
    change: &'static str,
    trend: Trend,
    icon: &'static str,
    accent: &'static str,
}

const CARDS: [CardFixture; 4] = [
    CardFixture {
        kpi: Kpi::Revenue,
        id: "revenue",
        label: "Total Revenue",
        change: "+12.5%",
        trend: Trend::Up,
        icon: "dollar-sign",
        accent: "from-emerald-500 to-teal-600",
    },
    CardFixture {
        kpi: Kpi::Users,
        id: "users",
        label: "Active Users",
        change: "+8.2%",
        trend: Trend::Up,
        icon: "users",
        accent: "from-blue-500 to-cyan-600",
    },
    CardFixture {
        kpi: Kpi::Orders,
        id: "orders",
        label: "Total Orders",
        change: "-2.4%",
        trend: Trend::Down,
        icon: "shopping-cart",
        accent: "from-purple-500 to-pink-600",
    },
    CardFixture {
        kpi: Kpi::Conversion,
        id: "conversion",
        label: "Conversion Rate",
        change: "+0.8%",
        trend: Trend::Up,
        icon: "activity",
        accent: "from-orange-500 to-red-600",
    },
];

impl Kpi {
    fn value(&self, snapshot: &MetricsSnapshot) -> f64 {
        match self {
            Kpi::Revenue => snapshot.revenue as f64,
            Kpi::Users => snapshot.active_users as f64,
            Kpi::Orders => snapshot.orders as f64,
            Kpi::Conversion => snapshot.conversion_rate,
        }
    }

    fn format(&self, snapshot: &MetricsSnapshot) -> String {
        match self {
            Kpi::Revenue => format_currency(snapshot.revenue),
            Kpi::Users => format_count(snapshot.active_users),
            Kpi::Orders => format_count(snapshot.orders),
            Kpi::Conversion => format_percentage(snapshot.conversion_rate),
        }
    }
}

/// Build the four cards for an update
pub fn stat_cards(update: &MetricsUpdate, mode: TrendMode) -> Vec<StatCard> {
    CARDS
        .iter()
        .map(|card| {
            let (trend, change) = match mode {
                TrendMode::Static => (card.trend, card.change.to_string()),
                TrendMode::Derived => derived_trend(card.kpi, update),
            };

            StatCard {
                id: card.id.to_string(),
                label: card.label.to_string(),
                value: card.kpi.format(&update.snapshot),
                trend,
                change,
                icon: card.icon.to_string(),
                accent: card.accent.to_string(),
            }
        })
        .collect()
}

/// Relative change since the previous snapshot. A flat or missing previous
/// value counts as up with `+0.0%`.
fn derived_trend(kpi: Kpi, update: &MetricsUpdate) -> (Trend, String) {
    let Some(previous) = update.previous else {
        return (Trend::Up, format_change(0.0));
    };

    let before = kpi.value(&previous);
    let after = kpi.value(&update.snapshot);
    let delta = after - before;

    let percent = if before == 0.0 {
        0.0
    } else {
        delta / before.abs() * 100.0
    };

    let trend = if delta < 0.0 { Trend::Down } else { Trend::Up };
    (trend, format_change(percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(previous: Option<MetricsSnapshot>, snapshot: MetricsSnapshot) -> MetricsUpdate {
        MetricsUpdate {
            tick: if previous.is_some() { 1 } else { 0 },
            snapshot,
            previous,
        }
    }

    #[test]
    fn test_static_cards() {
        let cards = stat_cards(&MetricsUpdate::initial(MetricsSnapshot::default()), TrendMode::Static);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].id, "revenue");
        assert_eq!(cards[0].label, "Total Revenue");
        assert_eq!(cards[0].value, "$45,231");
        assert_eq!(cards[0].change, "+12.5%");
        assert_eq!(cards[0].trend, Trend::Up);

        assert_eq!(cards[1].value, "2,345");
        assert_eq!(cards[1].change, "+8.2%");

        assert_eq!(cards[2].value, "1,234");
        assert_eq!(cards[2].change, "-2.4%");
        assert_eq!(cards[2].trend, Trend::Down);

        assert_eq!(cards[3].value, "3.24%");
        assert_eq!(cards[3].change, "+0.8%");
    }

    #[test]
    fn test_static_labels_ignore_movement() {
        let previous = MetricsSnapshot::new(1000, 100, 100, 5.0);
        let current = MetricsSnapshot::new(500, 200, 300, 1.0);
        let cards = stat_cards(&update(Some(previous), current), TrendMode::Static);

        assert_eq!(cards[0].trend, Trend::Up);
        assert_eq!(cards[0].change, "+12.5%");
        assert_eq!(cards[2].trend, Trend::Down);
    }

    #[test]
    fn test_derived_trends() {
        let previous = MetricsSnapshot::new(1000, 200, 100, 4.0);
        let current = MetricsSnapshot::new(1100, 190, 100, 5.0);
        let cards = stat_cards(&update(Some(previous), current), TrendMode::Derived);

        assert_eq!(cards[0].trend, Trend::Up);
        assert_eq!(cards[0].change, "+10.0%");
        assert_eq!(cards[1].trend, Trend::Down);
        assert_eq!(cards[1].change, "-5.0%");
        assert_eq!(cards[2].trend, Trend::Up);
        assert_eq!(cards[2].change, "+0.0%");
        assert_eq!(cards[3].change, "+25.0%");
    }

    #[test]
    fn test_derived_without_previous() {
        let cards = stat_cards(&MetricsUpdate::initial(MetricsSnapshot::default()), TrendMode::Derived);
        assert!(cards.iter().all(|c| c.trend == Trend::Up && c.change == "+0.0%"));
    }

    #[test]
    fn test_derived_from_zero() {
        let previous = MetricsSnapshot::new(0, 0, 0, 0.0);
        let current = MetricsSnapshot::new(50, -3, 0, 0.0);
        let cards = stat_cards(&update(Some(previous), current), TrendMode::Derived);
        assert_eq!(cards[0].change, "+0.0%");
        assert_eq!(cards[1].trend, Trend::Down);
    }

    #[test]
    fn test_trend_mode_parse() {
        assert_eq!("static".parse::<TrendMode>().unwrap(), TrendMode::Static);
        assert_eq!("Derived".parse::<TrendMode>().unwrap(), TrendMode::Derived);
        assert!("live".parse::<TrendMode>().is_err());
    }
}
