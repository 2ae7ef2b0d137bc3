//! Application configuration from the environment.

use std::path::PathBuf;

use crate::planner::PlannerConfig;

pub const LOCATIONS_VAR: &str = "ROUTE_PLANNER_LOCATIONS";
pub const DISTANCES_VAR: &str = "ROUTE_PLANNER_DISTANCES";
pub const INPUT_VAR: &str = "ROUTE_PLANNER_INPUT";
pub const OUTPUT_VAR: &str = "ROUTE_PLANNER_OUTPUT";
pub const MAX_SUGGESTIONS_VAR: &str = "ROUTE_PLANNER_MAX_SUGGESTIONS";

/// Errors that can occur while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Variable set to something that is not a count
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidCount { var: &'static str, value: String },
}

/// Where the binary reads its data and requests, and how it plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub locations_path: PathBuf,
    pub distances_path: PathBuf,
    /// Request file read for every menu choice.
    pub input_path: PathBuf,
    /// Report file; a `.json` extension selects JSON output.
    pub output_path: PathBuf,
    pub planner: PlannerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locations_path: PathBuf::from("Locations.csv"),
            distances_path: PathBuf::from("Distances.csv"),
            input_path: PathBuf::from("input.txt"),
            output_path: PathBuf::from("output.txt"),
            planner: PlannerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from `ROUTE_PLANNER_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(LOCATIONS_VAR) {
            config.locations_path = path.into();
        }
        if let Some(path) = lookup(DISTANCES_VAR) {
            config.distances_path = path.into();
        }
        if let Some(path) = lookup(INPUT_VAR) {
            config.input_path = path.into();
        }
        if let Some(path) = lookup(OUTPUT_VAR) {
            config.output_path = path.into();
        }
        if let Some(value) = lookup(MAX_SUGGESTIONS_VAR) {
            let max_suggestions = value.trim().parse().map_err(|_| ConfigError::InvalidCount {
                var: MAX_SUGGESTIONS_VAR,
                value,
            })?;
            config.planner = PlannerConfig::new(max_suggestions);
        }

        Ok(config)
    }
}
