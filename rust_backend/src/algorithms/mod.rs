//! Growth and production analytics.
//!
//! Pure numeric routines behind the herd dashboard. Nothing here touches I/O
//! or configuration; callers pass every input explicitly.
//!
//! # Components
//!
//! - [`ratios`]: Division that yields `None` instead of infinities
//! - [`metrics`]: Summary KPIs (weight gain, ADG, FCR, revenue, profit)
//! - [`regression`]: Ordinary least-squares line fitting
//! - [`growth`]: Least-squares ADG from an unordered weigh-in series
//! - [`projection`]: Days to target weight and the projected growth curve
//! - [`ration`]: Pearson-square two-feed blending
//!
//! # Example
//!
//! ```
//! use herd_analytics::algorithms::{compute_adg_from_timeseries, estimate_days_to_target};
//!
//! let (adg, _series) = compute_adg_from_timeseries(&[0, 14, 28], &[210.0, 221.2, 232.4]);
//! let days = estimate_days_to_target(232.4, 450.0, adg);
//! assert!(days > 270.0 && days < 273.0);
//! ```

pub mod growth;
pub mod metrics;
pub mod projection;
pub mod ration;
pub mod ratios;
pub mod regression;

pub use growth::{
    compute_adg_from_timeseries, estimate_growth, DayAxis, GrowthEstimate, MIN_OBSERVATIONS,
};
pub use metrics::{compute_metrics, SummaryInputs};
pub use projection::{estimate_days_to_target, project_weight_curve, projection_horizon};
pub use ration::{pearson_square, RationMix};
pub use ratios::safe_div;
pub use regression::{fit_line, LinearFit};
