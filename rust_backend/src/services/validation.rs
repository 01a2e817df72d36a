//! Validation of report requests.
//!
//! Checks run before any metric is computed. Every failing field is collected
//! so the caller can show all problems at once instead of one per submission.

use serde::Serialize;
use std::fmt;

use super::report::ReportRequest;

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a report request.
///
/// Returns an empty vector when the request is acceptable.
pub fn validate_request(request: &ReportRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_quantity(&mut issues, "initial_weight", Some(request.initial_weight));
    check_quantity(&mut issues, "current_weight", request.current_weight);
    check_quantity(&mut issues, "target_weight", request.target_weight);
    check_quantity(&mut issues, "feed_consumed", Some(request.feed_consumed));
    check_quantity(&mut issues, "price_per_kg", request.price_per_kg);
    check_quantity(&mut issues, "feed_cost_per_kg", request.feed_cost_per_kg);

    if request.period_days < 1 {
        issues.push(ValidationIssue::new("period_days", "must be at least 1"));
    }

    if request.species.trim().is_empty() && request.target_weight.is_none() {
        issues.push(ValidationIssue::new(
            "species",
            "is required when no target weight is given",
        ));
    }

    issues
}

/// Absent optional values are fine; present ones must be finite and non-negative.
fn check_quantity(issues: &mut Vec<ValidationIssue>, field: &str, value: Option<f64>) {
    match value {
        Some(v) if !v.is_finite() => {
            issues.push(ValidationIssue::new(field, "must be a finite number"));
        }
        Some(v) if v < 0.0 => {
            issues.push(ValidationIssue::new(field, "must be non-negative"));
        }
        _ => {}
    }
}
