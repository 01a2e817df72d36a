use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use pyo3::prelude::*;

use crate::algorithms::{
    compute_adg_from_timeseries, compute_metrics, estimate_days_to_target, pearson_square,
    safe_div,
};
use crate::core::domain::{MetricsResult, RawValue};

/// Python wrapper for MetricsResult
#[pyclass(name = "MetricsResult")]
#[derive(Clone)]
pub struct PyMetricsResult {
    #[pyo3(get)]
    pub weight_gain: f64,
    #[pyo3(get)]
    pub adg: Option<f64>,
    #[pyo3(get)]
    pub fcr: Option<f64>,
    #[pyo3(get)]
    pub revenue_now: f64,
    #[pyo3(get)]
    pub costs: f64,
    #[pyo3(get)]
    pub profit_now: f64,
    #[pyo3(get)]
    pub cost_per_kg_gain: Option<f64>,
}

#[pymethods]
impl PyMetricsResult {
    fn __repr__(&self) -> String {
        format!(
            "MetricsResult(weight_gain={:.2}, adg={:?}, fcr={:?}, profit_now={:.2})",
            self.weight_gain, self.adg, self.fcr, self.profit_now
        )
    }
}

impl From<MetricsResult> for PyMetricsResult {
    fn from(m: MetricsResult) -> Self {
        PyMetricsResult {
            weight_gain: m.weight_gain,
            adg: m.adg,
            fcr: m.fcr,
            revenue_now: m.revenue_now,
            costs: m.costs,
            profit_now: m.profit_now,
            cost_per_kg_gain: m.cost_per_kg_gain,
        }
    }
}

/// Convert an arbitrary Python cell (None, number, date, datetime, str) into a raw value.
fn raw_value(obj: &Bound<'_, PyAny>) -> PyResult<RawValue> {
    if obj.is_none() {
        return Ok(RawValue::Missing);
    }
    // datetime.datetime is a subclass of datetime.date, so try it first
    if let Ok(ts) = obj.extract::<NaiveDateTime>() {
        return Ok(ts.into());
    }
    if let Ok(ts) = obj.extract::<DateTime<Utc>>() {
        return Ok(ts.into());
    }
    if let Ok(date) = obj.extract::<NaiveDate>() {
        return Ok(date.into());
    }
    if let Ok(v) = obj.extract::<f64>() {
        return Ok(v.into());
    }
    if let Ok(s) = obj.extract::<String>() {
        return Ok(RawValue::from_cell(&s));
    }
    Ok(RawValue::from_cell(&obj.str()?.to_string()))
}

fn raw_values(items: &[Bound<'_, PyAny>]) -> PyResult<Vec<RawValue>> {
    items.iter().map(raw_value).collect()
}

/// Compute summary KPIs.
#[pyfunction]
#[pyo3(name = "compute_metrics")]
pub fn py_compute_metrics(
    initial_weight: f64,
    current_weight: f64,
    period_days: i64,
    feed_consumed: f64,
    price_per_kg: f64,
    feed_cost_per_kg: f64,
) -> PyMetricsResult {
    compute_metrics(
        initial_weight,
        current_weight,
        period_days,
        feed_consumed,
        price_per_kg,
        feed_cost_per_kg,
    )
    .into()
}

/// Least-squares ADG from two columns.
///
/// Returns `(adg or None, [(day, weight), ...])`.
#[pyfunction]
#[pyo3(name = "compute_adg_from_timeseries")]
pub fn py_compute_adg_from_timeseries(
    timestamps: Vec<Bound<'_, PyAny>>,
    weights: Vec<Bound<'_, PyAny>>,
) -> PyResult<(Option<f64>, Vec<(f64, f64)>)> {
    let timestamps = raw_values(&timestamps)?;
    let weights = raw_values(&weights)?;

    let (adg, series) = compute_adg_from_timeseries(&timestamps, &weights);
    let points = series.iter().map(|p| (p.day, p.weight)).collect();
    Ok((adg, points))
}

/// Days to reach `target_weight`; `inf` when unreachable.
#[pyfunction]
#[pyo3(name = "estimate_days_to_target")]
pub fn py_estimate_days_to_target(current_weight: f64, target_weight: f64, adg: Option<f64>) -> f64 {
    estimate_days_to_target(current_weight, target_weight, adg)
}

#[pyfunction]
#[pyo3(name = "safe_div")]
pub fn py_safe_div(a: f64, b: f64) -> Option<f64> {
    safe_div(a, b)
}

/// Pearson-square blend as `(percent_a, percent_b)`, or None if the target is out of range.
#[pyfunction]
#[pyo3(name = "pearson_square")]
pub fn py_pearson_square(target_cp: f64, cp_a: f64, cp_b: f64) -> Option<(f64, f64)> {
    pearson_square(target_cp, cp_a, cp_b).map(|mix| (mix.percent_a, mix.percent_b))
}
