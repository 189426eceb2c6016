//! Interactive route optimizer.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use route_optimizer::config::Config;
use route_optimizer::nominatim::NominatimClient;
use route_optimizer::planner::RoutePlanner;
use route_optimizer::shell::Shell;
use route_optimizer::solver::CheapestArcSolver;

fn main() {
    // Logs go to stderr so they stay out of the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Config::parse()) {
        eprintln!("route-optimizer: {err}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let geocoder = NominatimClient::new(config.nominatim())?;
    let planner = RoutePlanner::new(geocoder)
        .with_solver(CheapestArcSolver::new(config.solve_options()))
        .with_retry(config.retry_policy())
        .with_map_options(config.map_options());

    let stdin = io::stdin();
    Shell::new(&planner, config.map_output.clone()).run(stdin.lock(), io::stdout())?;
    Ok(())
}
