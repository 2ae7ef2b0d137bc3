//! Directed roads and the segment keys used to exclude them.

use std::fmt;

use serde::Serialize;

use crate::domain::{LocationId, Minutes, TravelMode};

/// A directed `(from, to)` pair identifying a road in exclusion sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Segment {
    pub from: LocationId,
    pub to: LocationId,
}

impl Segment {
    pub fn new(from: impl Into<LocationId>, to: impl Into<LocationId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

/// A directed road between two locations.
///
/// Each cost is `None` when the road cannot be used in that mode, e.g. a
/// footpath has no driving cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    origin: LocationId,
    destination: LocationId,
    driving: Option<Minutes>,
    walking: Option<Minutes>,
}

impl Road {
    pub(super) fn new(
        origin: LocationId,
        destination: LocationId,
        driving: Option<Minutes>,
        walking: Option<Minutes>,
    ) -> Self {
        Self {
            origin,
            destination,
            driving,
            walking,
        }
    }

    pub fn origin(&self) -> LocationId {
        self.origin
    }

    pub fn destination(&self) -> LocationId {
        self.destination
    }

    pub fn driving_time(&self) -> Option<Minutes> {
        self.driving
    }

    pub fn walking_time(&self) -> Option<Minutes> {
        self.walking
    }

    /// The cost of this road in the given mode, or `None` if impassable.
    pub fn cost(&self, mode: TravelMode) -> Option<Minutes> {
        match mode {
            TravelMode::Driving => self.driving_time(),
            TravelMode::Walking => self.walking_time(),
        }
    }

    /// The exclusion key of this road.
    pub fn segment(&self) -> Segment {
        Segment {
            from: self.origin,
            to: self.destination,
        }
    }
}
