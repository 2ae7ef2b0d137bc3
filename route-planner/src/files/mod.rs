//! File adapters around the planner.
//!
//! Loads the road network from CSV, reads route requests from the
//! line-oriented request file, and writes results as a text or JSON report.

mod error;
mod loader;
mod report;
mod request;

pub use error::{LoadError, ReportError, RequestError};
pub use loader::{load_locations, load_network, load_roads};
pub use report::{ReportFormat, TextReport, write_report};
pub use request::{parse_request, read_request};
