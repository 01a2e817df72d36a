//! Service layer for report orchestration.
//!
//! Services sit between the numeric algorithms and the outer surfaces (the
//! `herd-report` binary and the Python bindings). They validate requests,
//! apply configuration defaults and assemble the final report.

pub mod insights;
pub mod report;
pub mod validation;

pub use insights::{generate_insights, Insight, InsightInputs, InsightKind, InsightLevel};
pub use report::{build_report, AdgMethod, GrowthReport, ReportRequest};
pub use validation::{validate_request, ValidationIssue};
