//! Python bindings for the herd analytics core.
//!
//! Compiled only with the `python` feature. The dashboard imports the
//! `herd_analytics` module and calls these functions with plain Python values
//! or pandas columns.
//!
//! # Modules
//!
//! - [`algorithms`]: Metric, growth and projection functions plus result wrappers

pub mod algorithms;

pub use algorithms::*;
