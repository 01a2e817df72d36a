//! Benchmark insights shown alongside the growth report.

use serde::{Deserialize, Serialize};

/// Severity of an insight, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    AdgUnavailable,
    AdgBelowBenchmark,
    AdgOnTrack,
    FcrUnavailable,
    FcrHigh,
    TargetUnreachable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub level: InsightLevel,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, level: InsightLevel, message: impl Into<String>) -> Self {
        Self {
            kind,
            level,
            message: message.into(),
        }
    }
}

/// Figures an insight pass looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightInputs<'a> {
    pub species: &'a str,
    pub adg: Option<f64>,
    pub fcr: Option<f64>,
    pub days_to_target: f64,
    /// `None` when the species has no configured benchmark.
    pub adg_threshold: Option<f64>,
    pub fcr_warning: f64,
}

/// Compare the computed figures against the species benchmark.
///
/// Insights are returned in a fixed order: growth rate, feed efficiency, then
/// the target outlook.
pub fn generate_insights(inputs: &InsightInputs<'_>) -> Vec<Insight> {
    let mut insights = Vec::new();

    match (inputs.adg, inputs.adg_threshold) {
        (None, _) => insights.push(Insight::new(
            InsightKind::AdgUnavailable,
            InsightLevel::Info,
            "Insufficient data to compute ADG.",
        )),
        (Some(adg), Some(threshold)) if adg < threshold => insights.push(Insight::new(
            InsightKind::AdgBelowBenchmark,
            InsightLevel::Warning,
            format!(
                "ADG ({:.3} kg/day) is below the benchmark for {} ({} kg/day).",
                adg, inputs.species, threshold
            ),
        )),
        (Some(adg), Some(_)) => insights.push(Insight::new(
            InsightKind::AdgOnTrack,
            InsightLevel::Success,
            format!(
                "ADG ({:.3} kg/day) is at/above the benchmark for {}.",
                adg, inputs.species
            ),
        )),
        (Some(_), None) => {}
    }

    match inputs.fcr {
        None => insights.push(Insight::new(
            InsightKind::FcrUnavailable,
            InsightLevel::Info,
            "FCR not available when weight gain is zero or negative.",
        )),
        Some(fcr) if fcr > inputs.fcr_warning => insights.push(Insight::new(
            InsightKind::FcrHigh,
            InsightLevel::Warning,
            format!("High FCR ({:.2}); verify inputs and animal health.", fcr),
        )),
        Some(_) => {}
    }

    if inputs.days_to_target.is_infinite() {
        insights.push(Insight::new(
            InsightKind::TargetUnreachable,
            InsightLevel::Error,
            "Cannot estimate days to target: ADG is zero or negative.",
        ));
    }

    insights
}
