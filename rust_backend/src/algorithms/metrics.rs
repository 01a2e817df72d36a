use serde::{Deserialize, Serialize};

use super::ratios::safe_div;
use crate::core::domain::MetricsResult;

/// Scalar inputs collected by the summary entry form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryInputs {
    pub initial_weight: f64,
    pub current_weight: f64,
    pub period_days: i64,
    pub feed_consumed: f64,
    pub price_per_kg: f64,
    pub feed_cost_per_kg: f64,
}

impl SummaryInputs {
    /// Compute the summary KPIs for these inputs.
    pub fn compute(&self) -> MetricsResult {
        compute_metrics(
            self.initial_weight,
            self.current_weight,
            self.period_days,
            self.feed_consumed,
            self.price_per_kg,
            self.feed_cost_per_kg,
        )
    }
}

/// Compute key production KPIs from summary inputs.
///
/// ADG here is the simple two-point average over the period. Weight gain may be
/// negative; only the ratios that become meaningless (FCR and cost per kg of
/// gain for zero or negative gain, ADG for a non-positive period) are `None`.
///
/// # Arguments
/// * `initial_weight` - Weight at the start of the period (kg)
/// * `current_weight` - Weight now (kg)
/// * `period_days` - Length of the period in days
/// * `feed_consumed` - Total feed consumed over the period (kg)
/// * `price_per_kg` - Market price per kg of live weight
/// * `feed_cost_per_kg` - Feed cost per kg of feed
///
/// # Examples
///
/// ```
/// use herd_analytics::algorithms::compute_metrics;
///
/// let m = compute_metrics(100.0, 150.0, 50, 200.0, 200.0, 40.0);
/// assert_eq!(m.weight_gain, 50.0);
/// assert_eq!(m.adg, Some(1.0));
/// assert_eq!(m.fcr, Some(4.0));
/// assert_eq!(m.profit_now, 22_000.0);
/// ```
pub fn compute_metrics(
    initial_weight: f64,
    current_weight: f64,
    period_days: i64,
    feed_consumed: f64,
    price_per_kg: f64,
    feed_cost_per_kg: f64,
) -> MetricsResult {
    let weight_gain = current_weight - initial_weight;
    let adg = if period_days > 0 {
        safe_div(weight_gain, period_days as f64)
    } else {
        None
    };
    let gain_ratio = |numerator: f64| {
        if weight_gain > 0.0 {
            safe_div(numerator, weight_gain)
        } else {
            None
        }
    };

    let revenue_now = current_weight * price_per_kg;
    let costs = feed_consumed * feed_cost_per_kg;

    MetricsResult {
        weight_gain,
        adg,
        fcr: gain_ratio(feed_consumed),
        revenue_now,
        costs,
        profit_now: revenue_now - costs,
        cost_per_kg_gain: gain_ratio(costs),
    }
}
