//! Route queries.
//!
//! Turns a typed [`RouteRequest`] into calls to the planner for each of the
//! three planning modes, and packages what comes back as a [`QueryOutcome`].

mod dispatch;
mod outcome;
mod request;

pub use dispatch::{QueryError, run};
pub use outcome::{EcoOutcome, QueryOutcome, RouteResult};
pub use request::{RouteMode, RouteRequest};
