//! One end-to-end optimisation run: geocode, measure, solve, render.

use crate::error::PlanError;
use crate::geocoder::geocode_all;
use crate::geodesic::GeodesicMatrix;
use crate::map::{MapOptions, RouteMap};
use crate::matrix::DistanceMatrix;
use crate::report::RouteReport;
use crate::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::route::Route;
use crate::solver::CheapestArcSolver;
use crate::traits::{Coordinate, DistanceMatrixProvider, Geocoder, RouteSolver};

/// The start address is always node 0.
pub const START_INDEX: usize = 0;

/// Everything produced by a single run.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Start address first, then clients in input order.
    pub addresses: Vec<String>,
    pub coordinates: Vec<Coordinate>,
    pub matrix: DistanceMatrix,
    pub route: Route,
    pub report: RouteReport,
    pub map: RouteMap,
}

/// Builds the ordered address list from raw user input.
///
/// The start address is trimmed and must not be blank. Client addresses
/// are one per line; lines are trimmed and blank lines skipped.
pub fn parse_addresses(start: &str, clients: &str) -> Result<Vec<String>, PlanError> {
    let start = start.trim();
    if start.is_empty() {
        return Err(PlanError::MissingStartAddress);
    }

    let mut addresses = vec![start.to_string()];
    addresses.extend(
        clients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );
    Ok(addresses)
}

/// Runs the optimisation pipeline with pluggable collaborators.
pub struct RoutePlanner<G, M = GeodesicMatrix, S = CheapestArcSolver> {
    geocoder: G,
    matrix_provider: M,
    solver: S,
    retry: RetryPolicy,
    sleeper: Box<dyn Sleeper>,
    map_options: MapOptions,
}

impl<G: Geocoder> RoutePlanner<G> {
    /// Planner with geodesic distances, the default solver and retry policy.
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            matrix_provider: GeodesicMatrix,
            solver: CheapestArcSolver::default(),
            retry: RetryPolicy::default(),
            sleeper: Box::new(ThreadSleeper),
            map_options: MapOptions::default(),
        }
    }
}

impl<G, M, S> RoutePlanner<G, M, S>
where
    G: Geocoder,
    M: DistanceMatrixProvider,
    S: RouteSolver,
{
    pub fn with_matrix_provider<M2>(self, matrix_provider: M2) -> RoutePlanner<G, M2, S>
    where
        M2: DistanceMatrixProvider,
    {
        RoutePlanner {
            geocoder: self.geocoder,
            matrix_provider,
            solver: self.solver,
            retry: self.retry,
            sleeper: self.sleeper,
            map_options: self.map_options,
        }
    }

    pub fn with_solver<S2: RouteSolver>(self, solver: S2) -> RoutePlanner<G, M, S2> {
        RoutePlanner {
            geocoder: self.geocoder,
            matrix_provider: self.matrix_provider,
            solver,
            retry: self.retry,
            sleeper: self.sleeper,
            map_options: self.map_options,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn with_map_options(mut self, map_options: MapOptions) -> Self {
        self.map_options = map_options;
        self
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Parses raw input and runs the pipeline.
    pub fn plan(&self, start: &str, clients: &str) -> Result<Plan, PlanError> {
        let addresses = parse_addresses(start, clients)?;
        self.plan_addresses(addresses)
    }

    /// Runs the pipeline over `addresses`, whose first entry is the start.
    ///
    /// Any failure aborts the run; nothing partial is returned.
    pub fn plan_addresses(&self, addresses: Vec<String>) -> Result<Plan, PlanError> {
        tracing::info!(stops = addresses.len(), "optimizing route");

        let coordinates =
            geocode_all(&self.geocoder, &addresses, &self.retry, self.sleeper.as_ref())?;
        let matrix = self.matrix_provider.matrix_for(&coordinates);
        let route = self.solver.solve(&matrix, START_INDEX)?;
        let report = RouteReport::build(&addresses, &matrix, &route)?;
        let map = RouteMap::build(&coordinates, &addresses, &route, self.map_options.clone())?;

        tracing::info!(
            stops = addresses.len(),
            total_meters = report.total_meters,
            "route optimized"
        );

        Ok(Plan {
            addresses,
            coordinates,
            matrix,
            route,
            report,
            map,
        })
    }
}
