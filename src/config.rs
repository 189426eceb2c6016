//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::map::MapOptions;
use crate::nominatim::NominatimConfig;
use crate::retry::RetryPolicy;
use crate::solver::SolveOptions;

/// Plan a near-optimal visiting order for a list of addresses.
#[derive(Debug, Clone, Parser)]
#[command(name = "route-optimizer", version, about)]
pub struct Config {
    /// Base URL of the Nominatim geocoding service.
    #[arg(
        long,
        env = "ROUTE_OPTIMIZER_NOMINATIM_URL",
        default_value = "https://nominatim.openstreetmap.org"
    )]
    pub nominatim_url: String,

    /// User-Agent sent with every geocoding request.
    #[arg(long, env = "ROUTE_OPTIMIZER_USER_AGENT", default_value = "route-optimizer")]
    pub user_agent: String,

    /// Restrict lookups to these ISO country codes (comma-separated).
    #[arg(long, env = "ROUTE_OPTIMIZER_COUNTRY_CODES")]
    pub country_codes: Option<String>,

    /// HTTP timeout per geocoding request, in seconds.
    #[arg(long, env = "ROUTE_OPTIMIZER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Lookup attempts per address before giving up.
    #[arg(
        long,
        env = "ROUTE_OPTIMIZER_MAX_ATTEMPTS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// Pause after each completed lookup, in milliseconds.
    #[arg(long, env = "ROUTE_OPTIMIZER_COURTESY_DELAY_MS", default_value_t = 1000)]
    pub courtesy_delay_ms: u64,

    /// Pause after each failed lookup, in milliseconds.
    #[arg(long, env = "ROUTE_OPTIMIZER_RETRY_DELAY_MS", default_value_t = 2000)]
    pub retry_delay_ms: u64,

    /// Rounds of local search after the initial tour is built.
    #[arg(long, env = "ROUTE_OPTIMIZER_LOCAL_SEARCH_ITERATIONS", default_value_t = 100)]
    pub local_search_iterations: usize,

    /// Where to write the rendered map.
    #[arg(long, env = "ROUTE_OPTIMIZER_MAP_OUTPUT", default_value = "route_map.html")]
    pub map_output: PathBuf,

    /// Initial map zoom level.
    #[arg(long, env = "ROUTE_OPTIMIZER_ZOOM", default_value_t = 13)]
    pub zoom: u8,
}

impl Config {
    pub fn nominatim(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.nominatim_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
            country_codes: self.country_codes.clone(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            success_delay: Duration::from_millis(self.courtesy_delay_ms),
            failure_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            local_search_iterations: self.local_search_iterations,
        }
    }

    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            zoom: self.zoom,
            ..MapOptions::default()
        }
    }
}
