use crate::core::domain::SeriesPoint;

/// Estimate the days needed to reach `target_weight` at a constant `adg`.
///
/// Returns `0.0` when the target is already met and `f64::INFINITY` when the
/// growth rate is missing, zero or negative: a flat or falling trajectory never
/// reaches a higher target under a linear model.
///
/// # Examples
///
/// ```
/// use herd_analytics::algorithms::estimate_days_to_target;
///
/// assert_eq!(estimate_days_to_target(200.0, 300.0, Some(0.5)), 200.0);
/// assert_eq!(estimate_days_to_target(300.0, 300.0, Some(1.0)), 0.0);
/// assert_eq!(estimate_days_to_target(200.0, 300.0, None), f64::INFINITY);
/// ```
pub fn estimate_days_to_target(current_weight: f64, target_weight: f64, adg: Option<f64>) -> f64 {
    if target_weight <= current_weight {
        return 0.0;
    }
    match adg {
        Some(rate) if rate > 0.0 => (target_weight - current_weight) / rate,
        _ => f64::INFINITY,
    }
}

/// Day-by-day weight projection starting from `start_weight`.
///
/// Produces `horizon_days + 1` points (day 0 through `horizon_days`). Negative
/// or missing growth is projected as flat.
pub fn project_weight_curve(start_weight: f64, adg: Option<f64>, horizon_days: u32) -> Vec<SeriesPoint> {
    let rate = adg.filter(|r| *r > 0.0).unwrap_or(0.0);
    (0..=horizon_days)
        .map(|day| {
            let day = day as f64;
            SeriesPoint::new(day, start_weight + day * rate)
        })
        .collect()
}

/// Horizon for the projection chart: days to target, but never shorter than `min_days`.
///
/// Returns `None` when the target is unreachable.
pub fn projection_horizon(days_to_target: f64, min_days: u32) -> Option<u32> {
    if !days_to_target.is_finite() {
        return None;
    }
    let whole_days = days_to_target.max(0.0).floor().min(u32::MAX as f64) as u32;
    Some(whole_days.max(min_days))
}
