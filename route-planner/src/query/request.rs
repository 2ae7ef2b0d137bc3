//! Typed route requests.

use std::fmt;

use crate::domain::{LocationId, Minutes};
use crate::planner::Exclusions;

/// How a request is planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    /// Best driving route plus an alternative on different roads.
    Plain,
    /// A single driving route honouring exclusions and an optional
    /// location that must be visited.
    Restricted,
    /// Drive to a parking location, then walk within a budget.
    Eco,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMode::Plain => f.write_str("plain"),
            RouteMode::Restricted => f.write_str("restricted"),
            RouteMode::Eco => f.write_str("eco"),
        }
    }
}

/// A validated route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: LocationId,
    pub destination: LocationId,
    pub mode: RouteMode,

    /// Locations and segments to avoid.
    pub exclusions: Exclusions,

    /// Location the restricted route must pass through.
    pub include: Option<LocationId>,

    /// Walking budget in minutes. Required in eco mode.
    pub max_walk: Option<Minutes>,
}

impl RouteRequest {
    /// Create a request with no exclusions.
    pub fn new(source: LocationId, destination: LocationId, mode: RouteMode) -> Self {
        Self {
            source,
            destination,
            mode,
            exclusions: Exclusions::default(),
            include: None,
            max_walk: None,
        }
    }

    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_include(mut self, include: LocationId) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_max_walk(mut self, max_walk: Minutes) -> Self {
        self.max_walk = Some(max_walk);
        self
    }
}
