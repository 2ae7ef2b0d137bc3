//! Query results handed to the report writer.

use serde::Serialize;

use crate::domain::{LocationId, Minutes};
use crate::planner::{EcoRoute, Route, Suggestion};

/// What an eco query found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EcoOutcome {
    /// A park-and-walk route within the walking budget.
    Exact { route: EcoRoute },

    /// No route fits the budget; these come closest, fastest first.
    Suggestions { suggestions: Vec<Suggestion> },

    /// Nothing reachable by car then on foot.
    Unreachable { max_walk: Minutes },
}

/// Mode-specific part of a query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RouteResult {
    Plain {
        best: Option<Route>,
        alternative: Option<Route>,
    },
    Restricted {
        route: Option<Route>,
    },
    Eco {
        max_walk: Minutes,
        result: EcoOutcome,
    },
}

/// The answer to one route request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub source: LocationId,
    pub destination: LocationId,
    pub result: RouteResult,
}
