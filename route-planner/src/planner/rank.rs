//! Ranking of park-and-walk itineraries.

use std::cmp::Ordering;

use super::eco::{EcoRoute, Suggestion};

/// Compare two feasible itineraries: lower total first, then shorter walk.
fn compare_routes(a: &EcoRoute, b: &EcoRoute) -> Ordering {
    a.total_minutes
        .cmp(&b.total_minutes)
        .then(a.walk_minutes.cmp(&b.walk_minutes))
}

/// Whether `candidate` should replace the current best itinerary.
///
/// Only a strict improvement replaces it, so among exact ties the first
/// candidate found is kept.
pub fn improves_on(candidate: &EcoRoute, best: Option<&EcoRoute>) -> bool {
    match best {
        None => true,
        Some(best) => compare_routes(candidate, best) == Ordering::Less,
    }
}

/// Rank over-budget suggestions.
///
/// Suggestions are ranked by:
/// 1. Total time (shorter is better)
/// 2. Parking location id (lower first, for a stable order)
pub fn rank_suggestions(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions.sort_by(|a, b| {
        a.total_minutes
            .cmp(&b.total_minutes)
            .then(a.parking.cmp(&b.parking))
    });
    suggestions
}
