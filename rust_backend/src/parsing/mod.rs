//! Parsers for weigh-in data supplied by the dashboard.
//!
//! # Parsers
//!
//! - [`timestamp`]: Coerce raw cells into calendar dates or numeric day offsets
//! - [`csv_parser`]: Parse uploaded two-column (date/day, weight) CSV sheets
//!
//! # Example
//!
//! ```no_run
//! use herd_analytics::parsing::csv_parser::load_timeseries_csv;
//! use std::path::Path;
//!
//! let series = load_timeseries_csv(Path::new("weights.csv"))
//!     .expect("Failed to load weigh-ins");
//! ```

pub mod csv_parser;
pub mod timestamp;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{load_timeseries_csv, parse_timeseries_csv};
pub use timestamp::{elapsed_days, parse_calendar, parse_number};
