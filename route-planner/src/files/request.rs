//! Request file parser.
//!
//! A request is a list of `Key:value` lines:
//!
//! ```text
//! Mode:driving
//! Source:5
//! Destination:4
//! AvoidNodes:2,3
//! AvoidSegments:(1,2),(3,4)
//! IncludeNode:6
//! ```
//!
//! `Mode:driving-walking` selects eco planning and needs `MaxWalkTime:<n>`.

use std::path::Path;

use tracing::warn;

use crate::domain::{LocationId, Minutes};
use crate::network::Segment;
use crate::planner::Exclusions;
use crate::query::{RouteMode, RouteRequest};

use super::error::RequestError;

/// Read and parse a request file.
///
/// `driving_mode` is used for `Mode:driving` requests and for requests with
/// no mode line; it is normally [`RouteMode::Plain`] or
/// [`RouteMode::Restricted`].
pub fn read_request(path: &Path, driving_mode: RouteMode) -> Result<RouteRequest, RequestError> {
    let text = std::fs::read_to_string(path)?;
    parse_request(&text, driving_mode)
}

/// Parse the text of a request file.
pub fn parse_request(text: &str, driving_mode: RouteMode) -> Result<RouteRequest, RequestError> {
    let mut mode = driving_mode;
    let mut source = None;
    let mut destination = None;
    let mut max_walk = None;
    let mut include = None;
    let mut exclusions = Exclusions::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((key, value)) = line.split_once(':') else {
            return Err(RequestError::MalformedLine(line.to_string()));
        };
        let value = value.trim();

        match key.trim() {
            "Mode" => {
                mode = match value {
                    "driving" => driving_mode,
                    "driving-walking" => RouteMode::Eco,
                    other => return Err(RequestError::UnknownMode(other.to_string())),
                }
            }
            "Source" => source = Some(parse_id("Source", value)?),
            "Destination" => destination = Some(parse_id("Destination", value)?),
            "MaxWalkTime" => max_walk = Some(parse_minutes("MaxWalkTime", value)?),
            "AvoidNodes" => exclusions.locations.extend(parse_id_list(value)?),
            "AvoidSegments" => exclusions.segments.extend(parse_segments(value)?),
            "IncludeNode" if !value.is_empty() => include = Some(parse_id("IncludeNode", value)?),
            "IncludeNode" => {}
            other => warn!(key = other, "ignoring unknown request field"),
        }
    }

    let source = source.ok_or(RequestError::MissingField("Source"))?;
    let destination = destination.ok_or(RequestError::MissingField("Destination"))?;
    if mode == RouteMode::Eco && max_walk.is_none() {
        return Err(RequestError::MissingField("MaxWalkTime"));
    }

    Ok(RouteRequest {
        source,
        destination,
        mode,
        exclusions,
        include,
        max_walk,
    })
}

fn parse_id(field: &'static str, value: &str) -> Result<LocationId, RequestError> {
    LocationId::parse(value).map_err(|source| RequestError::InvalidId { field, source })
}

fn parse_minutes(field: &'static str, value: &str) -> Result<Minutes, RequestError> {
    value.parse().map_err(|_| RequestError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// `2,3,7`; empty means none.
fn parse_id_list(value: &str) -> Result<Vec<LocationId>, RequestError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id("AvoidNodes", s))
        .collect()
}

/// `(1,2),(3,4)`; empty means none.
fn parse_segments(value: &str) -> Result<Vec<Segment>, RequestError> {
    let invalid = || RequestError::InvalidSegment(value.to_string());
    let mut segments = Vec::new();
    let mut rest = value.trim();

    while !rest.is_empty() {
        let inner = rest.strip_prefix('(').ok_or_else(invalid)?;
        let (pair, tail) = inner.split_once(')').ok_or_else(invalid)?;
        let (from, to) = pair.split_once(',').ok_or_else(invalid)?;

        let from = LocationId::parse(from).map_err(|_| invalid())?;
        let to = LocationId::parse(to).map_err(|_| invalid())?;
        segments.push(Segment { from, to });

        let tail = tail.trim_start();
        rest = match tail.strip_prefix(',') {
            Some(next) => next.trim_start(),
            None if tail.is_empty() => tail,
            None => return Err(invalid()),
        };
    }

    Ok(segments)
}
