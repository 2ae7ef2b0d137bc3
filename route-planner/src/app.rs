//! One menu turn: read the request file, plan it, write the report.

use crate::config::AppConfig;
use crate::files::{ReportError, RequestError, read_request, write_report};
use crate::planner::Planner;
use crate::query::{self, QueryError, RouteMode};

/// Errors that can end a menu turn.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request file missing or malformed
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    /// Request names something the network cannot answer
    #[error("query failed: {0}")]
    Query(#[from] QueryError),

    /// Report could not be written
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Request file mode does not match the menu choice
    #[error("request asks for {requested} routing, but the menu chose {chosen}")]
    ModeMismatch {
        requested: RouteMode,
        chosen: RouteMode,
    },
}

/// Answer the request in `config.input_path` as a `chosen` route and write
/// the report to `config.output_path`.
///
/// Eco requests must say `Mode:driving-walking`; plain and restricted
/// requests say `Mode:driving` or leave the mode out.
pub fn answer_request(
    planner: &Planner<'_>,
    config: &AppConfig,
    chosen: RouteMode,
) -> Result<(), AppError> {
    let driving_mode = match chosen {
        RouteMode::Eco => RouteMode::Plain,
        driving => driving,
    };
    let request = read_request(&config.input_path, driving_mode)?;

    if (chosen == RouteMode::Eco) != (request.mode == RouteMode::Eco) {
        return Err(AppError::ModeMismatch {
            requested: request.mode,
            chosen,
        });
    }

    let outcome = query::run(planner, &request)?;
    write_report(&config.output_path, &outcome)?;
    Ok(())
}
