//! Error types for the fallible parts of the analytics core.
//!
//! The numeric operations never fail: insufficient data and undefined ratios
//! are reported as `None`. Errors are reserved for I/O, configuration and
//! request validation performed around those operations.

use crate::services::validation::ValidationIssue;

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// One or more request fields failed validation.
    #[error("Invalid input: {}", format_issues(.issues))]
    InvalidInput { issues: Vec<ValidationIssue> },

    /// No benchmark is configured for the requested species.
    #[error("Unknown species '{0}' and no target weight provided")]
    UnknownSpecies(String),

    /// A value required to build the report could not be resolved.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Uploaded table does not have the expected shape.
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyticsError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a missing-input error.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// Whether the error was caused by the caller's request rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::UnknownSpecies(_)
                | Self::MissingInput(_)
                | Self::MalformedTable(_)
        )
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_lists_every_issue() {
        let err = AnalyticsError::InvalidInput {
            issues: vec![
                ValidationIssue::new("initial_weight", "must be non-negative"),
                ValidationIssue::new("period_days", "must be at least 1"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("initial_weight: must be non-negative"));
        assert!(msg.contains("period_days: must be at least 1"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(AnalyticsError::UnknownSpecies("Camel".into()).is_input_error());
        assert!(AnalyticsError::missing("current_weight").is_input_error());
        assert!(!AnalyticsError::configuration("bad toml").is_input_error());
    }
}
