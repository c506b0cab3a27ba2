//! KPI Snapshot
//!
//! The complete set of KPI values at one instant, and the random-walk step
//! that moves it forward.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::random::RandomSource;

/// Lower bound of the conversion rate, in percent
pub const CONVERSION_MIN: f64 = 0.0;

/// Upper bound of the conversion rate, in percent
pub const CONVERSION_MAX: f64 = 10.0;

/// Per-tick revenue drift (currency units)
pub const REVENUE_STEP: Range<i64> = -50..150;

/// Per-tick active user drift
pub const USERS_STEP: Range<i64> = -5..15;

/// Per-tick order drift
pub const ORDERS_STEP: Range<i64> = -2..8;

/// Per-tick conversion rate drift (percentage points)
pub const CONVERSION_STEP: Range<f64> = -0.1..0.1;

/// Current values of the four headline KPIs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSnapshot {
    /// Total revenue in whole currency units
    pub revenue: i64,
    /// Active users
    pub active_users: i64,
    /// Total orders
    pub orders: i64,
    /// Conversion rate in percent, always within [0, 10]
    pub conversion_rate: f64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            revenue: 45_231,
            active_users: 2_345,
            orders: 1_234,
            conversion_rate: 3.24,
        }
    }
}

impl MetricsSnapshot {
    /// Create a snapshot, clamping the conversion rate into range
    pub fn new(revenue: i64, active_users: i64, orders: i64, conversion_rate: f64) -> Self {
        Self {
            revenue,
            active_users,
            orders,
            conversion_rate: clamp_conversion(conversion_rate),
        }
    }

    /// Apply one random-walk step.
    ///
    /// Draw order is revenue, users, orders, conversion. Counters may go
    /// negative; they saturate at the `i64` limits.
    pub fn step(&self, random: &mut dyn RandomSource) -> Self {
        let revenue = self.revenue.saturating_add(random.int_in(REVENUE_STEP));
        let active_users = self.active_users.saturating_add(random.int_in(USERS_STEP));
        let orders = self.orders.saturating_add(random.int_in(ORDERS_STEP));
        let conversion_rate = clamp_conversion(self.conversion_rate + random.real_in(CONVERSION_STEP));

        Self {
            revenue,
            active_users,
            orders,
            conversion_rate,
        }
    }
}

/// Clamp a conversion rate into [0, 10]
pub fn clamp_conversion(value: f64) -> f64 {
    value.clamp(CONVERSION_MIN, CONVERSION_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::random::{ScriptedRandom, StdRandom};

    #[test]
    fn test_default_seed_values() {
        let snapshot = MetricsSnapshot::default();
        assert_eq!(snapshot.revenue, 45231);
        assert_eq!(snapshot.active_users, 2345);
        assert_eq!(snapshot.orders, 1234);
        assert_eq!(snapshot.conversion_rate, 3.24);
    }

    #[test]
    fn test_step_with_scripted_draws() {
        let mut random = ScriptedRandom::new(vec![100, 10, 3], vec![0.05]);
        let next = MetricsSnapshot::default().step(&mut random);

        assert_eq!(next.revenue, 45331);
        assert_eq!(next.active_users, 2355);
        assert_eq!(next.orders, 1237);
        assert!((next.conversion_rate - 3.29).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_clamped_at_zero() {
        let mut random = ScriptedRandom::new(vec![0], vec![-0.1]);
        let start = MetricsSnapshot::new(0, 0, 0, 0.0);
        assert_eq!(start.step(&mut random).conversion_rate, 0.0);
    }

    #[test]
    fn test_conversion_clamped_at_ten() {
        let mut random = ScriptedRandom::new(vec![0], vec![0.1]);
        let start = MetricsSnapshot::new(0, 0, 0, 10.0);
        assert_eq!(start.step(&mut random).conversion_rate, 10.0);
    }

    #[test]
    fn test_new_clamps_conversion() {
        assert_eq!(MetricsSnapshot::new(0, 0, 0, 12.5).conversion_rate, 10.0);
        assert_eq!(MetricsSnapshot::new(0, 0, 0, -1.0).conversion_rate, 0.0);
    }

    #[test]
    fn test_counters_may_go_negative() {
        let mut random = ScriptedRandom::new(vec![-50, -5, -2], vec![0.0]);
        let next = MetricsSnapshot::new(10, 1, 0, 1.0).step(&mut random);
        assert_eq!(next.revenue, -40);
        assert_eq!(next.active_users, -4);
        assert_eq!(next.orders, -2);
    }

    #[test]
    fn test_counters_saturate_at_limits() {
        let mut random = ScriptedRandom::new(vec![100, -10, 3], vec![0.0]);
        let start = MetricsSnapshot::new(i64::MAX - 10, i64::MIN + 5, i64::MAX, 1.0);
        let next = start.step(&mut random);

        assert_eq!(next.revenue, i64::MAX);
        assert_eq!(next.active_users, i64::MIN);
        assert_eq!(next.orders, i64::MAX);
        assert_eq!(next.step(&mut random).revenue, i64::MAX);
    }

    #[test]
    fn test_random_walk_stays_in_bounds() {
        let mut random = StdRandom::seeded(7);
        let mut snapshot = MetricsSnapshot::new(0, 0, 0, 9.95);

        for _ in 0..10_000 {
            let next = snapshot.step(&mut random);
            let revenue_delta = next.revenue - snapshot.revenue;
            let users_delta = next.active_users - snapshot.active_users;
            let orders_delta = next.orders - snapshot.orders;

            assert!(REVENUE_STEP.contains(&revenue_delta));
            assert!(USERS_STEP.contains(&users_delta));
            assert!(ORDERS_STEP.contains(&orders_delta));
            assert!((CONVERSION_MIN..=CONVERSION_MAX).contains(&next.conversion_rate));

            snapshot = next;
        }
    }
}
