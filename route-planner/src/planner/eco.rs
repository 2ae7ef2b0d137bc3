//! Park-and-walk planning.
//!
//! Drives from the source to a parking location, then walks to the
//! destination. Every parking location is tried; the fastest one within the
//! walking budget wins, and the ones over budget are kept as suggestions.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{LocationId, Minutes, TravelMode};
use crate::network::Segment;

use super::rank::{improves_on, rank_suggestions};
use super::search::{Planner, Route};

/// A park-and-walk itinerary that fits the walking budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcoRoute {
    pub drive: Route,
    pub walk: Route,
    pub parking: LocationId,
    pub total_minutes: Minutes,
    pub walk_minutes: Minutes,
}

/// A park-and-walk itinerary whose walk exceeds the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub drive: Route,
    pub walk: Route,
    pub parking: LocationId,
    pub total_minutes: Minutes,
    pub walk_minutes: Minutes,
    /// How far the walk is over the budget. Always positive.
    pub exceeds_by: Minutes,
}

/// Outcome of a park-and-walk search.
///
/// Having neither a best route nor suggestions is a normal outcome: nothing
/// is reachable by car then on foot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EcoPlan {
    /// Fastest itinerary within budget; ties go to the shorter walk.
    pub best: Option<EcoRoute>,

    /// Over-budget itineraries, fastest first.
    pub suggestions: Vec<Suggestion>,
}

impl Planner<'_> {
    /// Plan a drive-then-walk trip with at most `max_walk` minutes on foot.
    ///
    /// Each parking candidate starts from its own copy of `avoid_segments`;
    /// its drive leg's segments are then excluded from its walk leg.
    pub fn plan_eco(
        &self,
        source: LocationId,
        destination: LocationId,
        max_walk: Minutes,
        avoid_locations: &HashSet<LocationId>,
        avoid_segments: &HashSet<Segment>,
    ) -> EcoPlan {
        let mut best: Option<EcoRoute> = None;
        let mut suggestions = Vec::new();

        let candidates = self
            .network()
            .locations()
            .filter(|l| l.has_parking() && l.id() != source && l.id() != destination);

        for candidate in candidates {
            let parking = candidate.id();
            let mut segments = avoid_segments.clone();

            let Some(drive) = self.shortest_path(
                source,
                parking,
                TravelMode::Driving,
                avoid_locations,
                &mut segments,
            ) else {
                trace!(%parking, "no drive to parking");
                continue;
            };

            let Some(walk) = self.shortest_path(
                parking,
                destination,
                TravelMode::Walking,
                avoid_locations,
                &mut segments,
            ) else {
                trace!(%parking, "no walk from parking");
                continue;
            };

            let walk_minutes = walk.minutes;
            let total_minutes = drive.minutes.saturating_add(walk_minutes);
            let exceeds_by = walk_minutes.saturating_sub(max_walk);

            if exceeds_by == 0 {
                let route = EcoRoute {
                    drive,
                    walk,
                    parking,
                    total_minutes,
                    walk_minutes,
                };
                if improves_on(&route, best.as_ref()) {
                    best = Some(route);
                }
            } else {
                suggestions.push(Suggestion {
                    drive,
                    walk,
                    parking,
                    total_minutes,
                    walk_minutes,
                    exceeds_by,
                });
            }
        }

        let suggestions = rank_suggestions(suggestions);

        debug!(
            %source,
            %destination,
            max_walk,
            best = ?best.as_ref().map(|r| r.parking),
            suggestions = suggestions.len(),
            "park-and-walk search complete"
        );

        EcoPlan { best, suggestions }
    }
}
