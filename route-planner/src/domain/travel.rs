//! Travel modes and time units.

use std::fmt;

use serde::Serialize;

/// Travel time in whole minutes.
pub type Minutes = u32;

/// How a road is traversed. Selects which cost of a road a search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Driving => f.write_str("driving"),
            TravelMode::Walking => f.write_str("walking"),
        }
    }
}
