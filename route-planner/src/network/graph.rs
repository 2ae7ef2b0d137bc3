//! Arena-backed road network.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{LocationCode, LocationId, Minutes};

use super::error::NetworkError;
use super::road::Road;

/// A physical location in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    code: LocationCode,
    has_parking: bool,
    roads: Vec<Road>,
}

impl Location {
    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn code(&self) -> &LocationCode {
        &self.code
    }

    /// Whether a car can be parked here to continue on foot.
    pub fn has_parking(&self) -> bool {
        self.has_parking
    }

    /// Roads leaving this location, in the order they were added.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }
}

/// The road network: every location, indexed by id and by code.
///
/// Locations live in an insertion-ordered arena. Lookups go through hash
/// indexes into that arena.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    locations: Vec<Location>,
    by_id: HashMap<LocationId, usize>,
    by_code: HashMap<LocationCode, usize>,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location.
    ///
    /// Rejects a location whose id or code is already present.
    pub fn add_location(
        &mut self,
        id: LocationId,
        code: LocationCode,
        has_parking: bool,
    ) -> Result<(), NetworkError> {
        if self.by_id.contains_key(&id) {
            return Err(NetworkError::DuplicateId(id));
        }
        if self.by_code.contains_key(&code) {
            return Err(NetworkError::DuplicateCode(code));
        }

        let idx = self.locations.len();
        self.by_id.insert(id, idx);
        self.by_code.insert(code.clone(), idx);
        self.locations.push(Location {
            id,
            code,
            has_parking,
            roads: Vec::new(),
        });

        Ok(())
    }

    /// Look up a location by id.
    pub fn find(&self, id: LocationId) -> Option<&Location> {
        self.by_id.get(&id).map(|&idx| &self.locations[idx])
    }

    /// Look up a location by its external code.
    pub fn find_by_code(&self, code: &LocationCode) -> Option<&Location> {
        self.by_code.get(code).map(|&idx| &self.locations[idx])
    }

    /// Check whether a location with this id exists.
    pub fn contains(&self, id: LocationId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Connect two locations in both directions with the same costs.
    ///
    /// Does nothing and returns `false` if either endpoint is unknown.
    pub fn add_road(
        &mut self,
        a: LocationId,
        b: LocationId,
        driving: Option<Minutes>,
        walking: Option<Minutes>,
    ) -> bool {
        let (Some(&a_idx), Some(&b_idx)) = (self.by_id.get(&a), self.by_id.get(&b)) else {
            warn!(from = %a, to = %b, "ignoring road with unknown endpoint");
            return false;
        };

        self.locations[a_idx]
            .roads
            .push(Road::new(a, b, driving, walking));
        self.locations[b_idx]
            .roads
            .push(Road::new(b, a, driving, walking));

        true
    }

    /// All locations, in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the network has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of directed roads.
    pub fn road_count(&self) -> usize {
        self.locations.iter().map(|l| l.roads.len()).sum()
    }

    /// Arena slot of a location, for call-scoped search tables.
    pub(crate) fn index_of(&self, id: LocationId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Location at an arena slot returned by [`Self::index_of`].
    pub(crate) fn at(&self, idx: usize) -> &Location {
        &self.locations[idx]
    }
}
