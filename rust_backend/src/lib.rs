//! Herd Analytics - growth-rate estimation and production metrics for livestock.
//!
//! The crate backs a farm-management dashboard. It computes summary KPIs from
//! a handful of form inputs, estimates average daily gain (ADG) from uploaded
//! weigh-in series by least squares, and projects how long an animal needs to
//! reach its target weight.
//!
//! # Layout
//!
//! - [`core`]: Shared value types (raw cells, normalised series, metrics)
//! - [`parsing`]: Timestamp coercion and CSV ingestion
//! - [`algorithms`]: Pure numeric routines
//! - [`config`]: `herd.toml` market prices, thresholds and species benchmarks
//! - [`services`]: Request validation, insights and report assembly
//!
//! # Example
//!
//! ```
//! use herd_analytics::{build_report, AnalyticsConfig, ReportRequest, TimeSeriesInput};
//!
//! let mut series = TimeSeriesInput::new();
//! series.push("2025-01-01", 250.0);
//! series.push("2025-01-15", 264.0);
//! series.push("2025-01-29", 278.0);
//!
//! let request = ReportRequest::new("Beef", 250.0, 28, 400.0);
//! let report = build_report(&request, Some(&series), &AnalyticsConfig::default()).unwrap();
//!
//! assert_eq!(report.current_weight, 278.0);
//! assert!((report.adg.unwrap() - 1.0).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod services;

#[cfg(feature = "python")]
pub mod python;

pub use algorithms::{
    compute_adg_from_timeseries, compute_metrics, estimate_days_to_target, safe_div,
};
pub use config::AnalyticsConfig;
pub use crate::core::{MetricsResult, NormalizedSeries, RawValue, SeriesPoint, TimeSeriesInput};
pub use error::{AnalyticsError, AnalyticsResult};
pub use services::{build_report, AdgMethod, GrowthReport, ReportRequest};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Herd Analytics Python module
#[cfg(feature = "python")]
#[pymodule]
fn herd_analytics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMetricsResult>()?;

    m.add_function(wrap_pyfunction!(python::py_compute_metrics, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_compute_adg_from_timeseries, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_estimate_days_to_target, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_safe_div, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_pearson_square, m)?)?;

    Ok(())
}
