//! Unit tests for the constrained shortest-path search.

use std::collections::HashSet;

use super::*;
use crate::domain::{LocationCode, LocationId, Minutes, TravelMode};
use crate::network::{RoadNetwork, Segment};

fn id(n: u32) -> LocationId {
    LocationId(n)
}

fn ids(ns: &[u32]) -> Vec<LocationId> {
    ns.iter().copied().map(LocationId).collect()
}

type RoadSpec = (u32, u32, Option<Minutes>, Option<Minutes>);

fn make_network(locations: &[(u32, bool)], roads: &[RoadSpec]) -> RoadNetwork {
    let mut network = RoadNetwork::new();
    for &(n, parking) in locations {
        let code = LocationCode::parse(&format!("L{n}")).unwrap();
        network.add_location(id(n), code, parking).unwrap();
    }
    for &(a, b, drive, walk) in roads {
        network.add_road(id(a), id(b), drive, walk);
    }
    network
}

/// A(1) -- B(2) -- C(3); A-B drive 5 walk 20, B-C drive 4 walk 3.
fn abc() -> RoadNetwork {
    make_network(
        &[(1, false), (2, true), (3, false)],
        &[(1, 2, Some(5), Some(20)), (2, 3, Some(4), Some(3))],
    )
}

/// Two routes from 1 to 4: via 2 (drive 3 + 3) and via 3 (drive 4 + 4).
fn diamond() -> RoadNetwork {
    make_network(
        &[(1, false), (2, false), (3, false), (4, false)],
        &[
            (1, 2, Some(3), Some(10)),
            (2, 4, Some(3), Some(10)),
            (1, 3, Some(4), Some(10)),
            (3, 4, Some(4), Some(10)),
        ],
    )
}

fn drive(
    network: &RoadNetwork,
    from: u32,
    to: u32,
    blocked: &HashSet<LocationId>,
    segments: &mut HashSet<Segment>,
) -> Option<Route> {
    let config = PlannerConfig::default();
    Planner::new(network, &config).shortest_path(
        id(from),
        id(to),
        TravelMode::Driving,
        blocked,
        segments,
    )
}

#[test]
fn plain_route_through_connector() {
    let network = abc();
    let mut segments = HashSet::new();

    let route = drive(&network, 1, 3, &HashSet::new(), &mut segments).unwrap();

    assert_eq!(route.stops, ids(&[1, 2, 3]));
    assert_eq!(route.minutes, 9);
}

#[test]
fn found_path_is_added_to_blocked_segments() {
    let network = abc();
    let mut segments = HashSet::new();

    drive(&network, 1, 3, &HashSet::new(), &mut segments).unwrap();

    let expected: HashSet<_> = [Segment::new(1, 2), Segment::new(2, 3)].into_iter().collect();
    assert_eq!(segments, expected);
}

#[test]
fn blocking_only_connector_gives_no_path() {
    let network = abc();
    let blocked: HashSet<_> = [id(2)].into_iter().collect();
    let mut segments = HashSet::new();

    assert!(drive(&network, 1, 3, &blocked, &mut segments).is_none());
    assert!(segments.is_empty());
}

#[test]
fn blocked_destination_gives_no_path() {
    let network = abc();
    let blocked: HashSet<_> = [id(3)].into_iter().collect();

    assert!(drive(&network, 1, 3, &blocked, &mut HashSet::new()).is_none());
}

#[test]
fn blocked_source_gives_no_path() {
    let network = abc();
    let blocked: HashSet<_> = [id(1)].into_iter().collect();

    assert!(drive(&network, 1, 3, &blocked, &mut HashSet::new()).is_none());
}

#[test]
fn blocked_location_is_routed_around() {
    let network = diamond();
    let blocked: HashSet<_> = [id(2)].into_iter().collect();

    let route = drive(&network, 1, 4, &blocked, &mut HashSet::new()).unwrap();
    assert_eq!(route.stops, ids(&[1, 3, 4]));
    assert_eq!(route.minutes, 8);
}

#[test]
fn blocked_segment_is_routed_around() {
    let network = diamond();
    let mut segments: HashSet<_> = [Segment::new(2, 4)].into_iter().collect();

    let route = drive(&network, 1, 4, &HashSet::new(), &mut segments).unwrap();
    assert_eq!(route.stops, ids(&[1, 3, 4]));
}

#[test]
fn blocked_segment_is_directional() {
    let network = abc();
    let mut segments: HashSet<_> = [Segment::new(2, 1)].into_iter().collect();

    let route = drive(&network, 1, 3, &HashSet::new(), &mut segments).unwrap();
    assert_eq!(route.stops, ids(&[1, 2, 3]));
}

#[test]
fn shared_segments_give_disjoint_alternative() {
    let network = diamond();
    let mut segments = HashSet::new();

    let best = drive(&network, 1, 4, &HashSet::new(), &mut segments).unwrap();
    let alternative = drive(&network, 1, 4, &HashSet::new(), &mut segments).unwrap();

    assert_eq!(best.stops, ids(&[1, 2, 4]));
    assert_eq!(best.minutes, 6);
    assert_eq!(alternative.stops, ids(&[1, 3, 4]));
    assert_eq!(alternative.minutes, 8);

    let best_segments: HashSet<_> = best.segments().collect();
    assert!(alternative.segments().all(|s| !best_segments.contains(&s)));
}

#[test]
fn no_alternative_gives_no_path_not_duplicate() {
    let network = abc();
    let mut segments = HashSet::new();

    assert!(drive(&network, 1, 3, &HashSet::new(), &mut segments).is_some());
    assert!(drive(&network, 1, 3, &HashSet::new(), &mut segments).is_none());
}

#[test]
fn fresh_segment_sets_repeat_the_same_path() {
    let network = diamond();

    let first = drive(&network, 1, 4, &HashSet::new(), &mut HashSet::new()).unwrap();
    let second = drive(&network, 1, 4, &HashSet::new(), &mut HashSet::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reverse_trip_survives_forward_exclusions() {
    let network = abc();
    let mut segments = HashSet::new();

    drive(&network, 1, 3, &HashSet::new(), &mut segments).unwrap();
    let back = drive(&network, 3, 1, &HashSet::new(), &mut segments).unwrap();
    assert_eq!(back.stops, ids(&[3, 2, 1]));
}

#[test]
fn walking_uses_walk_costs() {
    let network = abc();
    let config = PlannerConfig::default();
    let planner = Planner::new(&network, &config);

    let route = planner
        .shortest_path(
            id(1),
            id(3),
            TravelMode::Walking,
            &HashSet::new(),
            &mut HashSet::new(),
        )
        .unwrap();
    assert_eq!(route.stops, ids(&[1, 2, 3]));
    assert_eq!(route.minutes, 23);
}

#[test]
fn impassable_roads_are_skipped() {
    // 1-2 is a footpath; driving must take the long way via 3.
    let network = make_network(
        &[(1, false), (2, false), (3, false)],
        &[
            (1, 2, None, Some(2)),
            (1, 3, Some(10), None),
            (3, 2, Some(10), None),
        ],
    );
    let config = PlannerConfig::default();
    let planner = Planner::new(&network, &config);

    let by_car = drive(&network, 1, 2, &HashSet::new(), &mut HashSet::new()).unwrap();
    assert_eq!(by_car.stops, ids(&[1, 3, 2]));
    assert_eq!(by_car.minutes, 20);

    let on_foot = planner
        .shortest_path(
            id(1),
            id(2),
            TravelMode::Walking,
            &HashSet::new(),
            &mut HashSet::new(),
        )
        .unwrap();
    assert_eq!(on_foot.stops, ids(&[1, 2]));

    let walk_to_3 = planner.shortest_path(
        id(1),
        id(3),
        TravelMode::Walking,
        &HashSet::new(),
        &mut HashSet::new(),
    );
    assert!(walk_to_3.is_none());
}

#[test]
fn disconnected_locations_have_no_path() {
    let network = make_network(
        &[(1, false), (2, false), (3, false), (4, false)],
        &[(1, 2, Some(1), Some(1)), (3, 4, Some(1), Some(1))],
    );
    let mut segments = HashSet::new();

    assert!(drive(&network, 1, 4, &HashSet::new(), &mut segments).is_none());
    assert!(segments.is_empty());
}

#[test]
fn unknown_endpoints_have_no_path() {
    let network = abc();
    let mut segments: HashSet<_> = [Segment::new(1, 2)].into_iter().collect();

    assert!(drive(&network, 99, 3, &HashSet::new(), &mut segments).is_none());
    assert!(drive(&network, 1, 99, &HashSet::new(), &mut segments).is_none());
    assert_eq!(segments.len(), 1);
}

#[test]
fn source_equals_destination() {
    let network = abc();
    let mut segments = HashSet::new();

    let route = drive(&network, 2, 2, &HashSet::new(), &mut segments).unwrap();
    assert_eq!(route.stops, ids(&[2]));
    assert_eq!(route.minutes, 0);
    assert!(segments.is_empty());
}

#[test]
fn equal_costs_prefer_first_discovered() {
    let network = make_network(
        &[(1, false), (2, false), (3, false), (4, false)],
        &[
            (1, 2, Some(5), None),
            (1, 3, Some(5), None),
            (2, 4, Some(5), None),
            (3, 4, Some(5), None),
        ],
    );

    let route = drive(&network, 1, 4, &HashSet::new(), &mut HashSet::new()).unwrap();
    assert_eq!(route.stops, ids(&[1, 2, 4]));
}

#[test]
fn cheaper_longer_path_wins() {
    let network = make_network(
        &[(1, false), (2, false), (3, false), (4, false)],
        &[
            (1, 4, Some(20), None),
            (1, 2, Some(2), None),
            (2, 3, Some(2), None),
            (3, 4, Some(2), None),
        ],
    );

    let route = drive(&network, 1, 4, &HashSet::new(), &mut HashSet::new()).unwrap();
    assert_eq!(route.stops, ids(&[1, 2, 3, 4]));
    assert_eq!(route.minutes, 6);
}

#[test]
fn zero_cost_roads() {
    let network = make_network(
        &[(1, false), (2, false), (3, false)],
        &[(1, 2, Some(0), None), (2, 3, Some(0), None)],
    );

    let route = drive(&network, 1, 3, &HashSet::new(), &mut HashSet::new()).unwrap();
    assert_eq!(route.stops, ids(&[1, 2, 3]));
    assert_eq!(route.minutes, 0);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A random graph: location count and undirected roads between them.
    fn graph_strategy() -> impl Strategy<Value = (u32, Vec<RoadSpec>)> {
        (2u32..8).prop_flat_map(|n| {
            let road = (
                0..n,
                0..n,
                proptest::option::of(0u32..20),
                proptest::option::of(0u32..20),
            );
            (Just(n), prop::collection::vec(road, 0..20))
        })
    }

    fn build(n: u32, roads: &[RoadSpec]) -> RoadNetwork {
        let locations: Vec<_> = (0..n).map(|i| (i, i % 2 == 0)).collect();
        make_network(&locations, roads)
    }

    /// Cheapest road cost from `a` to `b` in `mode`, if any.
    fn cheapest_road(
        network: &RoadNetwork,
        a: LocationId,
        b: LocationId,
        mode: TravelMode,
    ) -> Option<Minutes> {
        network
            .find(a)?
            .roads()
            .iter()
            .filter(|r| r.destination() == b)
            .filter_map(|r| r.cost(mode))
            .min()
    }

    /// Bellman-Ford reference distances from `source`.
    fn reference_distances(
        network: &RoadNetwork,
        n: u32,
        source: u32,
        mode: TravelMode,
    ) -> Vec<Option<u64>> {
        let mut dist = vec![None; n as usize];
        dist[source as usize] = Some(0u64);
        for _ in 0..n {
            for location in network.locations() {
                let Some(d) = dist[location.id().0 as usize] else {
                    continue;
                };
                for road in location.roads() {
                    let Some(cost) = road.cost(mode) else {
                        continue;
                    };
                    let to = road.destination().0 as usize;
                    let candidate = d + cost as u64;
                    if dist[to].is_none_or(|best| candidate < best) {
                        dist[to] = Some(candidate);
                    }
                }
            }
        }
        dist
    }

    proptest! {
        #[test]
        fn matches_reference_distance(
            (n, roads) in graph_strategy(),
            source in 0u32..8,
            destination in 0u32..8,
            walking in any::<bool>(),
        ) {
            let source = source % n;
            let destination = destination % n;
            let mode = if walking { TravelMode::Walking } else { TravelMode::Driving };
            let network = build(n, &roads);
            let config = PlannerConfig::default();
            let planner = Planner::new(&network, &config);

            let expected = reference_distances(&network, n, source, mode)[destination as usize];
            let route = planner.shortest_path(
                id(source),
                id(destination),
                mode,
                &HashSet::new(),
                &mut HashSet::new(),
            );

            prop_assert_eq!(route.map(|r| r.minutes as u64), expected);
        }

        #[test]
        fn route_cost_is_sum_of_roads(
            (n, roads) in graph_strategy(),
            source in 0u32..8,
            destination in 0u32..8,
        ) {
            let source = source % n;
            let destination = destination % n;
            let network = build(n, &roads);
            let config = PlannerConfig::default();
            let planner = Planner::new(&network, &config);
            let mut segments = HashSet::new();

            if let Some(route) = planner.shortest_path(
                id(source),
                id(destination),
                TravelMode::Driving,
                &HashSet::new(),
                &mut segments,
            ) {
                prop_assert_eq!(route.origin(), Some(id(source)));
                prop_assert_eq!(route.destination(), Some(id(destination)));

                let mut total: Minutes = 0;
                for segment in route.segments() {
                    let cost =
                        cheapest_road(&network, segment.from, segment.to, TravelMode::Driving);
                    prop_assert!(cost.is_some(), "no drivable road for {}", segment);
                    total += cost.unwrap_or_default();
                    prop_assert!(segments.contains(&segment));
                }
                prop_assert_eq!(total, route.minutes);
                prop_assert_eq!(segments.len(), route.segments().collect::<HashSet<_>>().len());
            } else {
                prop_assert!(segments.is_empty());
            }
        }

        #[test]
        fn alternative_never_reuses_segments(
            (n, roads) in graph_strategy(),
            source in 0u32..8,
            destination in 0u32..8,
        ) {
            let source = source % n;
            let destination = (destination % n + 1) % n;
            prop_assume!(source != destination);
            let network = build(n, &roads);
            let config = PlannerConfig::default();
            let planner = Planner::new(&network, &config);
            let mut segments = HashSet::new();
            let none = HashSet::new();

            let mut search = || {
                planner.shortest_path(
                    id(source),
                    id(destination),
                    TravelMode::Driving,
                    &none,
                    &mut segments,
                )
            };
            let best = search();
            let alternative = search();

            match (best, alternative) {
                (Some(best), Some(alternative)) => {
                    let used: HashSet<_> = best.segments().collect();
                    prop_assert!(alternative.segments().all(|s| !used.contains(&s)));
                    prop_assert!(alternative.minutes >= best.minutes);
                }
                (None, alternative) => prop_assert!(alternative.is_none()),
                (Some(_), None) => {}
            }
        }

        #[test]
        fn blocked_locations_never_appear(
            (n, roads) in graph_strategy(),
            source in 0u32..8,
            destination in 0u32..8,
            blocked in prop::collection::hash_set(0u32..8, 0..3),
        ) {
            let source = source % n;
            let destination = destination % n;
            let network = build(n, &roads);
            let config = PlannerConfig::default();
            let planner = Planner::new(&network, &config);
            let blocked: HashSet<_> = blocked.into_iter().map(LocationId).collect();

            if let Some(route) = planner.shortest_path(
                id(source),
                id(destination),
                TravelMode::Driving,
                &blocked,
                &mut HashSet::new(),
            ) {
                prop_assert!(!blocked.contains(&id(destination)));
                // A blocked source only reaches itself.
                if blocked.contains(&id(source)) {
                    prop_assert_eq!(route.stops.len(), 1);
                }
                for stop in &route.stops[1..] {
                    prop_assert!(!blocked.contains(stop));
                }
            }
        }
    }
}
