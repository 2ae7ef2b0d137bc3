//! CSV network loader.
//!
//! Locations file columns: `name,id,code,parking` (parking is `1` for yes).
//! Distances file columns: `code1,code2,driving,walking`, where `X` marks a
//! mode that cannot use the road. Both files start with a header row.

use std::io;
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use crate::domain::{LocationCode, LocationId, Minutes};
use crate::network::RoadNetwork;

use super::error::LoadError;

/// Marker for "this mode cannot use the road".
const IMPASSABLE: &str = "X";

/// Load a network from a locations file and a distances file.
pub fn load_network(locations: &Path, distances: &Path) -> Result<RoadNetwork, LoadError> {
    let mut network = RoadNetwork::new();

    let reader = csv_reader().from_path(locations)?;
    let added = read_locations(reader, &mut network)?;

    let reader = csv_reader().from_path(distances)?;
    let connected = read_roads(reader, &mut network)?;

    info!(
        locations = added,
        roads = connected,
        locations_file = %locations.display(),
        distances_file = %distances.display(),
        "road network loaded"
    );

    Ok(network)
}

/// Add every location in a locations CSV to the network.
///
/// Returns the number of locations added.
pub fn load_locations<R: io::Read>(
    input: R,
    network: &mut RoadNetwork,
) -> Result<usize, LoadError> {
    read_locations(csv_reader().from_reader(input), network)
}

/// Connect locations from a distances CSV.
///
/// Returns the number of connections added.
pub fn load_roads<R: io::Read>(input: R, network: &mut RoadNetwork) -> Result<usize, LoadError> {
    read_roads(csv_reader().from_reader(input), network)
}

fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn read_locations<R: io::Read>(
    mut reader: csv::Reader<R>,
    network: &mut RoadNetwork,
) -> Result<usize, LoadError> {
    let mut added = 0;

    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let (Some(id), Some(code), Some(parking)) =
            (column(&record, 1), column(&record, 2), column(&record, 3))
        else {
            continue;
        };

        let id = LocationId::parse(id).map_err(|e| invalid_row(line, e))?;
        let code = LocationCode::parse(code).map_err(|e| invalid_row(line, e))?;

        network.add_location(id, code, parking == "1")?;
        added += 1;
    }

    Ok(added)
}

fn read_roads<R: io::Read>(
    mut reader: csv::Reader<R>,
    network: &mut RoadNetwork,
) -> Result<usize, LoadError> {
    let mut connected = 0;

    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let (Some(from), Some(to)) = (column(&record, 0), column(&record, 1)) else {
            continue;
        };

        let (Some(from_id), Some(to_id)) = (lookup(network, from), lookup(network, to)) else {
            warn!(line, from, to, "skipping road between unknown locations");
            continue;
        };

        let driving = parse_cost(column(&record, 2), line, "driving")?;
        let walking = parse_cost(column(&record, 3), line, "walking")?;

        if network.add_road(from_id, to_id, driving, walking) {
            connected += 1;
        }
    }

    Ok(connected)
}

/// Non-empty column at `idx`, if present.
fn column(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|s| !s.is_empty())
}

fn lookup(network: &RoadNetwork, code: &str) -> Option<LocationId> {
    let code = LocationCode::parse(code).ok()?;
    network.find_by_code(&code).map(|l| l.id())
}

fn parse_cost(value: Option<&str>, line: u64, mode: &str) -> Result<Option<Minutes>, LoadError> {
    let Some(value) = value else {
        return Err(invalid_row(line, format!("missing {mode} time")));
    };

    if value.eq_ignore_ascii_case(IMPASSABLE) {
        return Ok(None);
    }

    value
        .parse::<Minutes>()
        .map(Some)
        .map_err(|_| invalid_row(line, format!("invalid {mode} time {value:?}")))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn invalid_row(line: u64, message: impl ToString) -> LoadError {
    LoadError::InvalidRow {
        line,
        message: message.to_string(),
    }
}
