//! Planning each kind of route request.

use tracing::info;

use crate::domain::{LocationId, TravelMode};
use crate::planner::{EcoPlan, Planner, Route};

use super::outcome::{EcoOutcome, QueryOutcome, RouteResult};
use super::request::{RouteMode, RouteRequest};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A location named in the request is not in the network
    #[error("unknown location id {0}")]
    UnknownLocation(LocationId),

    /// Eco request without a walking budget
    #[error("eco request is missing a maximum walking time")]
    MissingWalkBudget,
}

/// Answer a route request.
///
/// An unreachable destination is a normal outcome reported inside the
/// result; errors are reserved for requests naming unknown locations.
pub fn run(planner: &Planner<'_>, request: &RouteRequest) -> Result<QueryOutcome, QueryError> {
    let network = planner.network();
    for id in [request.source, request.destination]
        .into_iter()
        .chain(request.include)
    {
        if !network.contains(id) {
            return Err(QueryError::UnknownLocation(id));
        }
    }

    let result = match request.mode {
        RouteMode::Plain => plan_plain(planner, request),
        RouteMode::Restricted => plan_restricted(planner, request),
        RouteMode::Eco => plan_eco(planner, request)?,
    };

    info!(
        source = %request.source,
        destination = %request.destination,
        mode = %request.mode,
        "route request planned"
    );

    Ok(QueryOutcome {
        source: request.source,
        destination: request.destination,
        result,
    })
}

/// Best driving route, then an alternative that avoids its segments.
fn plan_plain(planner: &Planner<'_>, request: &RouteRequest) -> RouteResult {
    let mut exclusions = request.exclusions.clone();

    let best = planner.shortest_path(
        request.source,
        request.destination,
        TravelMode::Driving,
        &exclusions.locations,
        &mut exclusions.segments,
    );

    let alternative = match &best {
        Some(route) if route.stops.len() > 1 => planner.shortest_path(
            request.source,
            request.destination,
            TravelMode::Driving,
            &exclusions.locations,
            &mut exclusions.segments,
        ),
        _ => None,
    };

    RouteResult::Plain { best, alternative }
}

/// A single driving route, through the include location if one is given.
fn plan_restricted(planner: &Planner<'_>, request: &RouteRequest) -> RouteResult {
    let mut exclusions = request.exclusions.clone();

    let mut leg = |from: LocationId, to: LocationId| -> Option<Route> {
        planner.shortest_path(
            from,
            to,
            TravelMode::Driving,
            &exclusions.locations,
            &mut exclusions.segments,
        )
    };

    let route = match request.include {
        Some(via) => leg(request.source, via)
            .and_then(|first| leg(via, request.destination).and_then(|second| first.join(second))),
        None => leg(request.source, request.destination),
    };

    RouteResult::Restricted { route }
}

/// Park-and-walk within the request's walking budget.
fn plan_eco(planner: &Planner<'_>, request: &RouteRequest) -> Result<RouteResult, QueryError> {
    let max_walk = request.max_walk.ok_or(QueryError::MissingWalkBudget)?;

    let EcoPlan {
        best,
        mut suggestions,
    } = planner.plan_eco(
        request.source,
        request.destination,
        max_walk,
        &request.exclusions.locations,
        &request.exclusions.segments,
    );

    suggestions.truncate(planner.config().max_suggestions);

    let result = match best {
        Some(route) => EcoOutcome::Exact { route },
        None if !suggestions.is_empty() => EcoOutcome::Suggestions { suggestions },
        None => EcoOutcome::Unreachable { max_walk },
    };

    Ok(RouteResult::Eco { max_walk, result })
}
