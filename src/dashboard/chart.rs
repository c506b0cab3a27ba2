//! Revenue Chart Data
//!
//! Twelve monthly bars drawn once per session. The timer never touches
//! them and the selected time range does not regenerate them.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::metrics::RandomSource;

/// Month labels, January first
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Range each monthly value is drawn from
pub const VALUE_RANGE: Range<i64> = 60..100;

/// Period buttons shown above the chart. They carry no behavior.
pub const PERIODS: [&str; 3] = ["Day", "Week", "Month"];

/// One generated month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub value: i64,
}

/// One rendered bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub month: String,
    /// Bar height as a percentage of the plot area
    pub height_percent: i64,
    /// Hover label
    pub tooltip: String,
}

/// Draw one value per month
pub fn generate_chart(random: &mut dyn RandomSource) -> Vec<ChartPoint> {
    MONTHS
        .iter()
        .map(|month| ChartPoint {
            month: month.to_string(),
            value: random.int_in(VALUE_RANGE),
        })
        .collect()
}

impl ChartPoint {
    /// Bar for this point; the hover label scales the value by 100
    pub fn to_bar(&self) -> ChartBar {
        ChartBar {
            month: self.month.clone(),
            height_percent: self.value,
            tooltip: format!("${}", self.value * 100),
        }
    }
}
