//! Domain types for the route planner.
//!
//! Identifiers and codes enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod location;
mod travel;

pub use location::{InvalidLocationCode, InvalidLocationId, LocationCode, LocationId};
pub use travel::{Minutes, TravelMode};
