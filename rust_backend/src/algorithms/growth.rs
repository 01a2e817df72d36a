//! Time-series growth estimation.
//!
//! Turns unordered weigh-in observations into a normalised day axis and fits a
//! least-squares line through them. The slope is the average daily gain (ADG).
//! A global fit smooths noisy field measurements instead of anchoring the rate
//! to two possibly-erroneous endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::regression::{fit_line, LinearFit};
use crate::core::domain::{NormalizedSeries, RawValue, SeriesPoint};
use crate::parsing::timestamp::elapsed_days;

/// A single point cannot determine a rate.
pub const MIN_OBSERVATIONS: usize = 2;

/// How the timestamp column was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayAxis {
    /// Timestamps read as calendar dates; days are elapsed time since the earliest.
    Calendar,
    /// Timestamps were read as numeric day offsets and shifted to start at zero.
    DayIndex,
}

/// Full result of a growth fit, including what the dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthEstimate {
    /// Fitted slope in weight units per day, `None` if undefined.
    pub adg: Option<f64>,
    pub series: NormalizedSeries,
    pub fit: Option<LinearFit>,
    /// `None` when no row could be read as either a date or a day offset.
    pub axis: Option<DayAxis>,
    /// Rows discarded because a value was missing or failed to coerce.
    pub dropped_rows: usize,
}

impl GrowthEstimate {
    fn insufficient(axis: Option<DayAxis>, dropped_rows: usize) -> Self {
        Self {
            adg: None,
            series: NormalizedSeries::empty(),
            fit: None,
            axis,
            dropped_rows,
        }
    }
}

/// Compute ADG from a weigh-in time series by least-squares regression.
///
/// # Arguments
/// * `timestamps` - Calendar dates (text or chrono values) or numeric day offsets
/// * `weights` - Weights, as numbers or numeric text
///
/// # Returns
/// * `(Some(adg), series)` with the slope in weight units per day
/// * `(None, empty)` when fewer than two usable observations remain
/// * `(None, series)` when every observation falls on the same day
///
/// # Examples
///
/// ```
/// use herd_analytics::algorithms::compute_adg_from_timeseries;
///
/// let (adg, series) = compute_adg_from_timeseries(
///     &["2025-01-01", "2025-01-11", "2025-01-21"],
///     &[100.0, 110.0, 120.0],
/// );
/// assert!((adg.unwrap() - 1.0).abs() < 1e-9);
/// assert_eq!(series.len(), 3);
/// ```
pub fn compute_adg_from_timeseries<T, W>(
    timestamps: &[T],
    weights: &[W],
) -> (Option<f64>, NormalizedSeries)
where
    T: Clone + Into<RawValue>,
    W: Clone + Into<RawValue>,
{
    let estimate = estimate_growth(timestamps, weights);
    (estimate.adg, estimate.series)
}

/// Same pipeline as [`compute_adg_from_timeseries`], keeping the fit details.
pub fn estimate_growth<T, W>(timestamps: &[T], weights: &[W]) -> GrowthEstimate
where
    T: Clone + Into<RawValue>,
    W: Clone + Into<RawValue>,
{
    if timestamps.len() != weights.len() {
        log::warn!(
            "Timestamp and weight columns differ in length ({} vs {}); ignoring the unmatched tail",
            timestamps.len(),
            weights.len()
        );
    }

    let rows: Vec<(RawValue, RawValue)> = timestamps
        .iter()
        .zip(weights)
        .map(|(t, w)| (t.clone().into(), w.clone().into()))
        .collect();

    estimate_from_rows(rows)
}

fn estimate_from_rows(rows: Vec<(RawValue, RawValue)>) -> GrowthEstimate {
    let total = rows.len();

    let present: Vec<(RawValue, RawValue)> = rows
        .into_iter()
        .filter(|(t, w)| !t.is_missing() && !w.is_missing())
        .collect();
    if present.len() < MIN_OBSERVATIONS {
        log::debug!(
            "Only {} of {} rows have both a timestamp and a weight",
            present.len(),
            total
        );
        return GrowthEstimate::insufficient(None, total);
    }

    // Read the column both ways and keep whichever retains more rows; dates win ties.
    let calendar = calendar_points(&present);
    let day_index = day_index_points(&present);
    let (axis, mut points) = if calendar.len() >= day_index.len() {
        (DayAxis::Calendar, calendar)
    } else {
        (DayAxis::DayIndex, day_index)
    };
    let axis = (!points.is_empty()).then_some(axis);
    log::debug!("Interpreting timestamp column as {:?}", axis);

    let dropped_rows = total - points.len();
    if dropped_rows > 0 {
        log::debug!("Dropped {} malformed or incomplete rows", dropped_rows);
    }
    if points.len() < MIN_OBSERVATIONS {
        return GrowthEstimate::insufficient(axis, dropped_rows);
    }

    // Stable: observations on the same day keep their input order.
    points.sort_by(|a, b| a.day.total_cmp(&b.day));
    let series = NormalizedSeries::from_sorted(points);

    let fit = fit_line(&series.days(), &series.weights());
    if fit.is_none() {
        log::warn!(
            "All {} observations fall on the same day; growth rate is undefined",
            series.len()
        );
    }

    GrowthEstimate {
        adg: fit.map(|f| f.slope),
        series,
        fit,
        axis,
        dropped_rows,
    }
}

/// Weights must be finite and non-negative.
fn coerce_weight(value: &RawValue) -> Option<f64> {
    value.as_number().filter(|w| *w >= 0.0)
}

fn calendar_points(rows: &[(RawValue, RawValue)]) -> Vec<SeriesPoint> {
    let kept: Vec<(NaiveDateTime, f64)> = rows
        .iter()
        .filter_map(|(t, w)| Some((t.as_datetime()?, coerce_weight(w)?)))
        .collect();

    let Some(earliest) = kept.iter().map(|(date, _)| *date).min() else {
        return Vec::new();
    };

    kept.into_iter()
        .map(|(date, weight)| SeriesPoint::new(elapsed_days(earliest, date), weight))
        .collect()
}

fn day_index_points(rows: &[(RawValue, RawValue)]) -> Vec<SeriesPoint> {
    let kept: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|(t, w)| Some((t.as_number()?, coerce_weight(w)?)))
        .collect();

    let origin = kept.iter().map(|(day, _)| *day).fold(f64::INFINITY, f64::min);

    kept.into_iter()
        .map(|(day, weight)| SeriesPoint::new(day - origin, weight))
        .collect()
}
