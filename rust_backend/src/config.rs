//! Analytics configuration file support.
//!
//! Market prices, benchmark thresholds and per-species targets are read from a
//! `herd.toml` file. Every section is optional; missing values fall back to the
//! dashboard defaults.
//!
//! ```toml
//! [market]
//! price_per_kg = 230.0
//! currency = "KES"
//!
//! [thresholds]
//! fcr_warning = 8.5
//!
//! [species.Goat]
//! target_weight = 35.0
//! adg_threshold = 0.1
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Benchmark figures for one species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesBenchmark {
    /// Typical market weight (kg).
    pub target_weight: f64,
    /// ADG at or above which growth is considered on track (kg/day).
    pub adg_threshold: f64,
}

/// Prices used when the request does not carry its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSettings {
    #[serde(default = "default_price_per_kg")]
    pub price_per_kg: f64,
    #[serde(default = "default_feed_cost_per_kg")]
    pub feed_cost_per_kg: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// FCR above this value triggers a feed-efficiency warning.
    #[serde(default = "default_fcr_warning")]
    pub fcr_warning: f64,
    /// Shortest horizon drawn on the projection chart.
    #[serde(default = "default_min_projection_days")]
    pub min_projection_days: u32,
}

/// Analytics configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub market: MarketSettings,
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Species benchmarks keyed by display name. Entries in a file are added
    /// to the built-in table, replacing any with the same name.
    #[serde(default = "default_species", deserialize_with = "merge_species")]
    pub species: BTreeMap<String, SpeciesBenchmark>,
}

fn default_price_per_kg() -> f64 {
    210.0
}

fn default_feed_cost_per_kg() -> f64 {
    45.0
}

fn default_currency() -> String {
    "KES".to_string()
}

fn default_fcr_warning() -> f64 {
    10.0
}

fn default_min_projection_days() -> u32 {
    30
}

fn default_species() -> BTreeMap<String, SpeciesBenchmark> {
    [
        ("Beef", 450.0, 0.8),
        ("Pig", 130.0, 0.6),
        ("Broiler", 2.5, 0.05),
    ]
    .into_iter()
    .map(|(name, target_weight, adg_threshold)| {
        (
            name.to_string(),
            SpeciesBenchmark {
                target_weight,
                adg_threshold,
            },
        )
    })
    .collect()
}

fn merge_species<'de, D>(deserializer: D) -> Result<BTreeMap<String, SpeciesBenchmark>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let overrides = BTreeMap::<String, SpeciesBenchmark>::deserialize(deserializer)?;
    let mut species = default_species();
    for (name, benchmark) in overrides {
        species.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        species.insert(name, benchmark);
    }
    Ok(species)
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            price_per_kg: default_price_per_kg(),
            feed_cost_per_kg: default_feed_cost_per_kg(),
            currency: default_currency(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fcr_warning: default_fcr_warning(),
            min_projection_days: default_min_projection_days(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            market: MarketSettings::default(),
            thresholds: Thresholds::default(),
            species: default_species(),
        }
    }
}

impl AnalyticsConfig {
    /// Load analytics configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AnalyticsConfig)` if successful
    /// * `Err(AnalyticsError::Configuration)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalyticsError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded analytics configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> AnalyticsResult<Self> {
        toml::from_str(content).map_err(|e| {
            AnalyticsError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load analytics configuration from the default location.
    ///
    /// Searches for `herd.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(AnalyticsConfig)` if found and parsed successfully
    /// * `Err(AnalyticsError::Configuration)` if no config file found or parse error
    pub fn from_default_location() -> AnalyticsResult<Self> {
        match Self::default_location() {
            Some(path) => Self::from_file(path),
            None => Err(AnalyticsError::configuration(
                "No herd.toml found in standard locations",
            )),
        }
    }

    /// First existing `herd.toml` among the standard locations.
    pub fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("herd.toml"),
            PathBuf::from("rust_backend/herd.toml"),
            PathBuf::from("../herd.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Look up the benchmark for `species`, ignoring case.
    pub fn benchmark(&self, species: &str) -> Option<&SpeciesBenchmark> {
        let species = species.trim();
        self.species
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(species))
            .map(|(_, benchmark)| benchmark)
    }

    /// Configured species names, sorted.
    pub fn species_names(&self) -> Vec<&str> {
        self.species.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = AnalyticsConfig::default();

        assert_eq!(config.market.price_per_kg, 210.0);
        assert_eq!(config.market.feed_cost_per_kg, 45.0);
        assert_eq!(config.market.currency, "KES");
        assert_eq!(config.thresholds.fcr_warning, 10.0);
        assert_eq!(config.thresholds.min_projection_days, 30);
        assert_eq!(config.species_names(), vec!["Beef", "Broiler", "Pig"]);

        let broiler = config.benchmark("Broiler").unwrap();
        assert_eq!(broiler.target_weight, 2.5);
        assert_eq!(broiler.adg_threshold, 0.05);
    }

    #[test]
    fn test_species_lookup_ignores_case() {
        let config = AnalyticsConfig::default();

        assert_eq!(config.benchmark("beef").unwrap().target_weight, 450.0);
        assert_eq!(config.benchmark(" PIG ").unwrap().adg_threshold, 0.6);
        assert!(config.benchmark("Camel").is_none());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AnalyticsConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyticsConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [market]
            price_per_kg = 230.0

            [thresholds]
            fcr_warning = 8.5

            [species.Goat]
            target_weight = 35.0
            adg_threshold = 0.1

            [species.beef]
            target_weight = 500.0
            adg_threshold = 1.0
        "#;
        let config = AnalyticsConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.market.price_per_kg, 230.0);
        assert_eq!(config.market.feed_cost_per_kg, 45.0);
        assert_eq!(config.thresholds.fcr_warning, 8.5);
        assert_eq!(config.thresholds.min_projection_days, 30);
        assert_eq!(config.benchmark("goat").unwrap().target_weight, 35.0);
        assert_eq!(config.benchmark("Beef").unwrap().target_weight, 500.0);
        assert_eq!(config.benchmark("Pig").unwrap().target_weight, 130.0);
        assert_eq!(config.species.len(), 4);
    }

    #[test]
    fn test_invalid_toml() {
        let err = AnalyticsConfig::from_toml_str("[market\nprice_per_kg = 1").unwrap_err();
        assert!(matches!(err, AnalyticsError::Configuration(_)));

        let err = AnalyticsConfig::from_toml_str("[market]\nprice_per_kg = \"cheap\"").unwrap_err();
        assert!(matches!(err, AnalyticsError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[market]\nfeed_cost_per_kg = 50.0").unwrap();

        let config = AnalyticsConfig::from_file(file.path()).unwrap();
        assert_eq!(config.market.feed_cost_per_kg, 50.0);
        assert_eq!(config.market.price_per_kg, 210.0);
    }

    #[test]
    fn test_missing_file() {
        let err = AnalyticsConfig::from_file("/nonexistent/herd.toml").unwrap_err();
        assert!(matches!(err, AnalyticsError::Configuration(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
