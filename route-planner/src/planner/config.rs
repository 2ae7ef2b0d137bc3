//! Planner configuration.

/// Default number of over-budget suggestions reported in eco mode.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 2;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of over-budget suggestions to report when no
    /// park-and-walk route fits the walking budget.
    pub max_suggestions: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_suggestions: usize) -> Self {
        Self { max_suggestions }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}
