//! Constrained shortest-path search.
//!
//! A single-source, single-target Dijkstra over one travel mode, with
//! per-call location and segment exclusions. Every successful search adds the
//! segments of the path it found to the caller's segment exclusions, so a
//! second call sharing the same set is forced onto different roads. That is
//! how alternative routes are produced.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{LocationId, Minutes, TravelMode};
use crate::network::{RoadNetwork, Segment};

use super::config::PlannerConfig;

/// A path through the network and its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Locations visited in order, from origin to destination.
    pub stops: Vec<LocationId>,

    /// Sum of the road costs along the path.
    pub minutes: Minutes,
}

impl Route {
    pub fn new(stops: Vec<LocationId>, minutes: Minutes) -> Self {
        Self { stops, minutes }
    }

    pub fn origin(&self) -> Option<LocationId> {
        self.stops.first().copied()
    }

    pub fn destination(&self) -> Option<LocationId> {
        self.stops.last().copied()
    }

    /// The directed segments travelled, in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.stops.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Join this route with one that starts where this one ends.
    ///
    /// The shared location appears once. Returns `None` if the routes do not
    /// meet.
    pub fn join(mut self, next: Route) -> Option<Route> {
        if self.destination()? != next.origin()? {
            return None;
        }
        self.stops.pop();
        self.stops.extend(next.stops);
        self.minutes = self.minutes.saturating_add(next.minutes);
        Some(self)
    }
}

/// Locations and segments a query must not use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    /// Locations whose roads may not be taken.
    pub locations: HashSet<LocationId>,

    /// Directed segments that may not be travelled. Searches add the
    /// segments of each path they return.
    pub segments: HashSet<Segment>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(mut self, ids: impl IntoIterator<Item = LocationId>) -> Self {
        self.locations.extend(ids);
        self
    }

    pub fn with_segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.segments.extend(segments);
        self
    }
}

/// Per-call search state, indexed by arena slot.
struct SearchTable {
    distance: Vec<Option<Minutes>>,
    /// (arena slot of the previous location, index of the road taken from it)
    via: Vec<Option<(usize, usize)>>,
}

impl SearchTable {
    fn new(len: usize) -> Self {
        Self {
            distance: vec![None; len],
            via: vec![None; len],
        }
    }
}

/// Route planner over a loaded road network.
///
/// The planner only reads the network; all search state lives in the call
/// that creates it.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    network: &'a RoadNetwork,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a RoadNetwork, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &'a RoadNetwork {
        self.network
    }

    pub fn config(&self) -> &'a PlannerConfig {
        self.config
    }

    /// Find the cheapest route from `source` to `destination` in `mode`.
    ///
    /// Blocked locations are never expanded, so no path passes through one,
    /// and a blocked destination is unreachable. Blocked segments are never
    /// travelled. On success every segment of the returned path is added to
    /// `blocked_segments`.
    ///
    /// Returns `None` when either endpoint is unknown or no path exists.
    pub fn shortest_path(
        &self,
        source: LocationId,
        destination: LocationId,
        mode: TravelMode,
        blocked_locations: &HashSet<LocationId>,
        blocked_segments: &mut HashSet<Segment>,
    ) -> Option<Route> {
        let network = self.network;

        let (Some(src), Some(dst)) = (network.index_of(source), network.index_of(destination))
        else {
            debug!(%source, %destination, "unknown endpoint, no route");
            return None;
        };

        if blocked_locations.contains(&destination) {
            debug!(%destination, "destination is blocked, no route");
            return None;
        }

        let mut table = SearchTable::new(network.len());
        table.distance[src] = Some(0);

        // Secondary key is push order, so equal distances pop first-discovered first.
        let mut frontier: BinaryHeap<Reverse<(Minutes, u64, usize)>> = BinaryHeap::new();
        let mut pushes: u64 = 0;
        frontier.push(Reverse((0, pushes, src)));

        while let Some(Reverse((distance, _, idx))) = frontier.pop() {
            if table.distance[idx].is_some_and(|best| distance > best) {
                continue;
            }
            if idx == dst {
                break;
            }

            let location = network.at(idx);
            if blocked_locations.contains(&location.id()) {
                trace!(location = %location.id(), "not expanding blocked location");
                continue;
            }

            for (road_idx, road) in location.roads().iter().enumerate() {
                let Some(cost) = road.cost(mode) else {
                    continue;
                };
                if blocked_segments.contains(&road.segment()) {
                    trace!(segment = %road.segment(), "skipping blocked segment");
                    continue;
                }
                let Some(next) = network.index_of(road.destination()) else {
                    continue;
                };

                let candidate = distance.saturating_add(cost);
                if table.distance[next].is_none_or(|best| candidate < best) {
                    table.distance[next] = Some(candidate);
                    table.via[next] = Some((idx, road_idx));
                    pushes += 1;
                    frontier.push(Reverse((candidate, pushes, next)));
                }
            }
        }

        let Some(minutes) = table.distance[dst] else {
            debug!(%source, %destination, %mode, "destination unreachable");
            return None;
        };

        let mut stops = vec![destination];
        let mut cur = dst;
        while cur != src {
            let (prev, road_idx) = table.via[cur]?;
            let road = &network.at(prev).roads()[road_idx];
            blocked_segments.insert(road.segment());
            stops.push(road.origin());
            cur = prev;
        }
        stops.reverse();

        debug!(
            %source,
            %destination,
            %mode,
            minutes,
            stops = stops.len(),
            "route found"
        );

        Some(Route { stops, minutes })
    }
}
