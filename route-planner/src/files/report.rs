//! Report writer.
//!
//! Renders a [`QueryOutcome`] as the line-oriented text report, or as JSON
//! when the output path ends in `.json`.

use std::fmt;
use std::path::Path;

use crate::planner::Route;
use crate::query::{EcoOutcome, QueryOutcome, RouteResult};

use super::error::ReportError;

/// Output format of a report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    /// Pick the format from a file extension: `.json` is JSON, anything else text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

/// Write `outcome` to `path`, creating parent directories if needed.
pub fn write_report(path: &Path, outcome: &QueryOutcome) -> Result<(), ReportError> {
    let contents = match ReportFormat::for_path(path) {
        ReportFormat::Json => serde_json::to_string_pretty(outcome)? + "\n",
        ReportFormat::Text => TextReport(outcome).to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;
    Ok(())
}

/// Text rendering of a query outcome.
///
/// ```
/// use route_planner::domain::LocationId;
/// use route_planner::files::TextReport;
/// use route_planner::planner::Route;
/// use route_planner::query::{QueryOutcome, RouteResult};
///
/// let outcome = QueryOutcome {
///     source: LocationId(1),
///     destination: LocationId(3),
///     result: RouteResult::Restricted {
///         route: Some(Route::new(vec![LocationId(1), LocationId(2), LocationId(3)], 9)),
///     },
/// };
/// assert_eq!(
///     TextReport(&outcome).to_string(),
///     "Source:1\nDestination:3\nRestrictedDrivingRoute:1,2,3 (9 min)\n"
/// );
/// ```
pub struct TextReport<'a>(pub &'a QueryOutcome);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "Source:{}", outcome.source)?;
        writeln!(f, "Destination:{}", outcome.destination)?;

        match &outcome.result {
            RouteResult::Plain { best, alternative } => {
                write_route(f, "BestDrivingRoute", best.as_ref())?;
                write_route(f, "AlternativeRoute", alternative.as_ref())
            }
            RouteResult::Restricted { route } => {
                write_route(f, "RestrictedDrivingRoute", route.as_ref())
            }
            RouteResult::Eco { result, .. } => write_eco(f, result),
        }
    }
}

fn write_eco(f: &mut fmt::Formatter<'_>, result: &EcoOutcome) -> fmt::Result {
    match result {
        EcoOutcome::Exact { route } => {
            write_route(f, "DrivingRoute", Some(&route.drive))?;
            writeln!(f, "ParkingNode:{}", route.parking)?;
            write_route(f, "WalkingRoute", Some(&route.walk))?;
            writeln!(f, "TotalTime:{}", route.total_minutes)
        }
        EcoOutcome::Suggestions { suggestions } => {
            for (i, suggestion) in suggestions.iter().enumerate() {
                let n = i + 1;
                write_route(f, &format!("DrivingRoute{n}"), Some(&suggestion.drive))?;
                writeln!(f, "ParkingNode{n}:{}", suggestion.parking)?;
                writeln!(
                    f,
                    "WalkingRoute{n}:{} ({} min)(Exceeds by {} min)",
                    stops(&suggestion.walk),
                    suggestion.walk_minutes,
                    suggestion.exceeds_by
                )?;
                writeln!(f, "TotalTime{n}:{}", suggestion.total_minutes)?;
            }
            Ok(())
        }
        EcoOutcome::Unreachable { max_walk } => {
            writeln!(f, "DrivingRoute:none")?;
            writeln!(f, "ParkingNode:none")?;
            writeln!(f, "WalkingRoute:none")?;
            writeln!(f, "TotalTime:none")?;
            writeln!(
                f,
                "Message:No possible route with max walking time of {max_walk} minutes."
            )
        }
    }
}

fn write_route(f: &mut fmt::Formatter<'_>, label: &str, route: Option<&Route>) -> fmt::Result {
    match route {
        Some(route) => writeln!(f, "{label}:{} ({} min)", stops(route), route.minutes),
        None => writeln!(f, "{label}:none"),
    }
}

fn stops(route: &Route) -> String {
    route
        .stops
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
