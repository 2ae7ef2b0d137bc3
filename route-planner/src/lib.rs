//! Road route planner.
//!
//! Finds shortest driving routes with an edge-disjoint alternative, routes
//! that avoid or pass through given locations, and park-and-walk routes that
//! keep the walk under a time budget.

pub mod app;
pub mod config;
pub mod domain;
pub mod files;
pub mod network;
pub mod planner;
pub mod query;
