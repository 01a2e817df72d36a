//! Growth report assembly.
//!
//! Ties the numeric routines together the way the dashboard presents them:
//! validate the form, resolve species defaults, compute the summary metrics,
//! pick an ADG source, then project towards the target weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::insights::{generate_insights, Insight, InsightInputs};
use super::validation::validate_request;
use crate::algorithms::{
    compute_metrics, estimate_days_to_target, estimate_growth, project_weight_curve,
    projection_horizon, GrowthEstimate,
};
use crate::config::AnalyticsConfig;
use crate::core::domain::{MetricsResult, SeriesPoint, TimeSeriesInput};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Source of the ADG used for projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdgMethod {
    /// Two-point average over the reporting period.
    Summary,
    /// Least-squares slope of the weigh-in series, falling back to
    /// [`AdgMethod::Summary`] when no usable series is available.
    #[default]
    TimeSeries,
}

impl AdgMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdgMethod::Summary => "summary",
            AdgMethod::TimeSeries => "time_series",
        }
    }
}

impl fmt::Display for AdgMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdgMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "average" => Ok(AdgMethod::Summary),
            "time-series" | "time_series" | "timeseries" | "regression" => {
                Ok(AdgMethod::TimeSeries)
            }
            other => Err(format!(
                "Unknown ADG method '{}'; expected 'summary' or 'time-series'",
                other
            )),
        }
    }
}

/// Everything the entry form collects for one animal or batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub animal_id: Option<String>,
    pub species: String,
    pub initial_weight: f64,
    /// Taken from the latest weigh-in when absent.
    #[serde(default)]
    pub current_weight: Option<f64>,
    /// Taken from the species benchmark when absent.
    #[serde(default)]
    pub target_weight: Option<f64>,
    pub period_days: i64,
    pub feed_consumed: f64,
    #[serde(default)]
    pub price_per_kg: Option<f64>,
    #[serde(default)]
    pub feed_cost_per_kg: Option<f64>,
    #[serde(default)]
    pub adg_method: AdgMethod,
}

impl ReportRequest {
    pub fn new(
        species: impl Into<String>,
        initial_weight: f64,
        period_days: i64,
        feed_consumed: f64,
    ) -> Self {
        Self {
            animal_id: None,
            species: species.into(),
            initial_weight,
            current_weight: None,
            target_weight: None,
            period_days,
            feed_consumed,
            price_per_kg: None,
            feed_cost_per_kg: None,
            adg_method: AdgMethod::default(),
        }
    }

    pub fn with_animal_id(mut self, animal_id: impl Into<String>) -> Self {
        self.animal_id = Some(animal_id.into());
        self
    }

    pub fn with_current_weight(mut self, weight: f64) -> Self {
        self.current_weight = Some(weight);
        self
    }

    pub fn with_target_weight(mut self, weight: f64) -> Self {
        self.target_weight = Some(weight);
        self
    }

    pub fn with_prices(mut self, price_per_kg: f64, feed_cost_per_kg: f64) -> Self {
        self.price_per_kg = Some(price_per_kg);
        self.feed_cost_per_kg = Some(feed_cost_per_kg);
        self
    }

    pub fn with_method(mut self, method: AdgMethod) -> Self {
        self.adg_method = method;
        self
    }
}

/// Complete analytics for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    pub animal_id: Option<String>,
    pub species: String,
    pub currency: String,
    pub current_weight: f64,
    pub target_weight: f64,
    pub metrics: MetricsResult,
    /// Present whenever a series was supplied, even if it yielded no rate.
    pub growth: Option<GrowthEstimate>,
    /// ADG driving the projection.
    pub adg: Option<f64>,
    /// Method that produced [`GrowthReport::adg`], after any fallback.
    pub adg_method: AdgMethod,
    /// `f64::INFINITY` when unreachable, which serialises to JSON `null`.
    pub days_to_target: f64,
    /// Empty when the target is unreachable.
    pub projection: Vec<SeriesPoint>,
    pub insights: Vec<Insight>,
}

impl GrowthReport {
    pub fn target_reachable(&self) -> bool {
        self.days_to_target.is_finite()
    }
}

/// Build the growth report for `request`.
///
/// # Arguments
/// * `request` - Form inputs
/// * `series` - Optional uploaded weigh-in series
/// * `config` - Market defaults, thresholds and species benchmarks
///
/// # Errors
/// * [`AnalyticsError::InvalidInput`] when any field fails validation
/// * [`AnalyticsError::UnknownSpecies`] when no target weight can be resolved
/// * [`AnalyticsError::MissingInput`] when there is no current weight and no usable series
pub fn build_report(
    request: &ReportRequest,
    series: Option<&TimeSeriesInput>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<GrowthReport> {
    let issues = validate_request(request);
    if !issues.is_empty() {
        return Err(AnalyticsError::InvalidInput { issues });
    }

    let species = request.species.trim();
    let benchmark = config.benchmark(species);
    let target_weight = request
        .target_weight
        .or_else(|| benchmark.map(|b| b.target_weight))
        .ok_or_else(|| AnalyticsError::UnknownSpecies(species.to_string()))?;

    let growth = series.map(|s| estimate_growth(&s.timestamps, &s.weights));

    let current_weight = match request.current_weight {
        Some(weight) => weight,
        None => growth
            .as_ref()
            .and_then(|g| g.series.last())
            .map(|point| point.weight)
            .ok_or_else(|| {
                AnalyticsError::missing(
                    "current_weight is required when no usable weight series is supplied",
                )
            })?,
    };

    let price_per_kg = request.price_per_kg.unwrap_or(config.market.price_per_kg);
    let feed_cost_per_kg = request
        .feed_cost_per_kg
        .unwrap_or(config.market.feed_cost_per_kg);

    let metrics = compute_metrics(
        request.initial_weight,
        current_weight,
        request.period_days,
        request.feed_consumed,
        price_per_kg,
        feed_cost_per_kg,
    );

    let (adg, adg_method) = select_adg(request.adg_method, &metrics, growth.as_ref());

    let days_to_target = estimate_days_to_target(current_weight, target_weight, adg);
    let projection = projection_horizon(days_to_target, config.thresholds.min_projection_days)
        .map(|horizon| project_weight_curve(current_weight, adg, horizon))
        .unwrap_or_default();

    let insights = generate_insights(&InsightInputs {
        species,
        adg,
        fcr: metrics.fcr,
        days_to_target,
        adg_threshold: benchmark.map(|b| b.adg_threshold),
        fcr_warning: config.thresholds.fcr_warning,
    });

    log::debug!(
        "Report for {} ({}): adg={:?} via {}, {} days to target",
        species,
        request.animal_id.as_deref().unwrap_or("-"),
        adg,
        adg_method,
        days_to_target
    );

    Ok(GrowthReport {
        animal_id: request.animal_id.clone(),
        species: species.to_string(),
        currency: config.market.currency.clone(),
        current_weight,
        target_weight,
        metrics,
        growth,
        adg,
        adg_method,
        days_to_target,
        projection,
        insights,
    })
}

fn select_adg(
    requested: AdgMethod,
    metrics: &MetricsResult,
    growth: Option<&GrowthEstimate>,
) -> (Option<f64>, AdgMethod) {
    match requested {
        AdgMethod::Summary => (metrics.adg, AdgMethod::Summary),
        AdgMethod::TimeSeries => match growth.and_then(|g| g.adg) {
            Some(adg) => (Some(adg), AdgMethod::TimeSeries),
            None => {
                log::info!("No valid time-series ADG; falling back to summary average");
                (metrics.adg, AdgMethod::Summary)
            }
        },
    }
}
