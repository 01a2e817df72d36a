//! Domain models for weight observations, growth series and production metrics.
//!
//! This module provides the value types shared by the estimator, the summary
//! calculator and the report service. All of them are transient: they are built
//! from caller-supplied input on every call and never cached.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::timestamp::{parse_calendar, parse_number};

/// A single raw cell from tabular input (an uploaded sheet or a form field).
///
/// Timestamps and weights arrive in whatever shape the upload produced: real
/// numbers, free text, already-parsed dates or blanks. Coercion into days and
/// kilograms happens inside the estimator so malformed cells can be dropped
/// row by row instead of failing the whole series.
///
/// # Examples
///
/// ```
/// use herd_analytics::core::domain::RawValue;
///
/// assert_eq!(RawValue::from(12).as_number(), Some(12.0));
/// assert_eq!(RawValue::from(" 7.5 ").as_number(), Some(7.5));
/// assert!(RawValue::from_cell("   ").is_missing());
/// assert!(RawValue::from("2025-01-11").as_datetime().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Timestamp(NaiveDateTime),
    Text(String),
    Missing,
}

impl RawValue {
    /// Build a value from a CSV cell. Blank cells become [`RawValue::Missing`].
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            RawValue::Missing
        } else {
            RawValue::Text(trimmed.to_string())
        }
    }

    /// Returns `true` for blank cells, explicit nulls and NaN (how dataframes mark blanks).
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Number(v) => v.is_nan(),
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Coerce to a finite number. Dates never coerce to numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) if v.is_finite() => Some(*v),
            RawValue::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// Coerce to a calendar date-time. Plain numbers are never treated as dates.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            RawValue::Timestamp(ts) => Some(*ts),
            RawValue::Text(s) => parse_calendar(s),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<f32> for RawValue {
    fn from(v: f32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(v: NaiveDate) -> Self {
        RawValue::Timestamp(v.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(v: NaiveDateTime) -> Self {
        RawValue::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(v: DateTime<Utc>) -> Self {
        RawValue::Timestamp(v.naive_utc())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// Raw two-column time series as supplied by an upload: a date/day column and a weight column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesInput {
    pub timestamps: Vec<RawValue>,
    pub weights: Vec<RawValue>,
}

impl TimeSeriesInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    pub fn push(&mut self, timestamp: impl Into<RawValue>, weight: impl Into<RawValue>) {
        self.timestamps.push(timestamp.into());
        self.weights.push(weight.into());
    }

    /// Number of complete rows (the shorter of the two columns).
    pub fn len(&self) -> usize {
        self.timestamps.len().min(self.weights.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One cleaned observation on the normalised day axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day: f64,
    pub weight: f64,
}

impl SeriesPoint {
    pub fn new(day: f64, weight: f64) -> Self {
        Self { day, weight }
    }
}

/// Cleaned, chronologically sorted observations used by the regression.
///
/// Day 0 is the earliest retained observation and day values never decrease.
/// Repeated days are kept as-is; the fit handles them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedSeries {
    points: Vec<SeriesPoint>,
}

impl NormalizedSeries {
    /// Series with no rows, returned whenever there is too little data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-normalised points. Callers must keep them sorted by day.
    pub(crate) fn from_sorted(points: Vec<SeriesPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].day <= w[1].day));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    pub fn days(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.day).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.weight).collect()
    }

    /// Latest observation, if any.
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Elapsed days between the first and last observation.
    pub fn span_days(&self) -> f64 {
        self.points.last().map(|p| p.day).unwrap_or(0.0)
    }
}

/// Key production indicators computed from summary inputs.
///
/// Ratios that would be meaningless (zero period, zero or negative gain) are
/// `None` rather than zero, so "no data" is never mistaken for "perfect efficiency".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub weight_gain: f64,
    pub adg: Option<f64>,
    pub fcr: Option<f64>,
    pub revenue_now: f64,
    pub costs: f64,
    pub profit_now: f64,
    pub cost_per_kg_gain: Option<f64>,
}
