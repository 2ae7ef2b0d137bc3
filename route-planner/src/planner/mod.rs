//! Route planning over a road network.
//!
//! This module implements the graph engine: a shortest-path search that can
//! exclude locations and road segments per call, alternative routes obtained
//! by re-running that search on the segments it already used, and a
//! park-and-walk planner that drives to every parking location and walks the
//! rest of the way within a walking budget.

mod config;
mod eco;
mod rank;
mod search;

#[cfg(test)]
mod search_tests;

pub use config::{DEFAULT_MAX_SUGGESTIONS, PlannerConfig};
pub use eco::{EcoPlan, EcoRoute, Suggestion};
pub use rank::rank_suggestions;
pub use search::{Exclusions, Planner, Route};
