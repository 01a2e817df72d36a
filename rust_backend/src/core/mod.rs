//! Core domain models for livestock growth analytics.
//!
//! This module defines the fundamental data structures used throughout the crate,
//! representing raw observations, normalised growth series and production metrics.

pub mod domain;

pub use domain::{MetricsResult, NormalizedSeries, RawValue, SeriesPoint, TimeSeriesInput};
