use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use route_planner::app::answer_request;
use route_planner::config::AppConfig;
use route_planner::files::load_network;
use route_planner::planner::Planner;
use route_planner::query::RouteMode;

const MENU: &str = "\
1. Plan Route
2. Plan Restricted Route
3. Plan Environmentally-Friendly Route
4. Exit";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let network = match load_network(&config.locations_path, &config.distances_path) {
        Ok(network) => network,
        Err(e) => {
            error!("failed to load road network: {e}");
            return ExitCode::FAILURE;
        }
    };
    let planner = Planner::new(&network, &config.planner);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{MENU}");
        print!("Choose an option: ");
        if let Err(e) = io::stdout().flush() {
            warn!(error = %e, "failed to flush prompt");
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let mode = match line.trim() {
            "1" => RouteMode::Plain,
            "2" => RouteMode::Restricted,
            "3" => RouteMode::Eco,
            "4" => break,
            other => {
                println!("Invalid option {other:?}, choose 1-4.");
                continue;
            }
        };

        match answer_request(&planner, &config, mode) {
            Ok(()) => println!("Result written to {}", config.output_path.display()),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    info!("exiting");
    ExitCode::SUCCESS
}
