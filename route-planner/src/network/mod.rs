//! Road network model.
//!
//! The network owns every location in an arena; each location owns the roads
//! that leave it. Roads refer to their endpoints by [`LocationId`], never by
//! reference, so the network is freely cloneable and read-only once loaded.
//!
//! [`LocationId`]: crate::domain::LocationId

mod error;
mod graph;
mod road;

pub use error::NetworkError;
pub use graph::{Location, RoadNetwork};
pub use road::{Road, Segment};
