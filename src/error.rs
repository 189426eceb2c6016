//! Error types for the route optimizer.
//!
//! Lookup errors are retryable; everything surfaced through [`PlanError`]
//! is terminal for the current invocation.

use std::path::PathBuf;

use thiserror::Error;

/// A single geocoding lookup failed.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The request could not be sent or the body could not be decoded.
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a coordinate that is not a valid position.
    #[error("geocoding service returned an invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: String, lng: String },
    /// The service answered but refused the lookup (non-success status).
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Building a [`crate::matrix::DistanceMatrix`] from raw rows failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
}

/// The solver could not produce a closed tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no locations to route")]
    EmptyMatrix,
    #[error("start index {start} is outside the {nodes}-node matrix")]
    StartOutOfRange { start: usize, nodes: usize },
    #[error("solver assignment reached {visited} of {nodes} nodes")]
    MalformedAssignment { visited: usize, nodes: usize },
}

/// The route map could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("route is empty")]
    EmptyRoute,
    #[error("route references node {node} with no coordinate or address")]
    UnknownNode { node: usize },
    #[error("failed to serialize route map: {0}")]
    Serialize(String),
}

/// A pipeline invocation failed.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("a starting address is required")]
    MissingStartAddress,
    /// An address could not be resolved after every retry.
    #[error("could not geocode {address:?} after {attempts} attempt(s)")]
    Geocode {
        address: String,
        attempts: u32,
        last_error: Option<String>,
    },
    #[error("could not compute a route: {0}")]
    Solve(#[from] SolveError),
    #[error("could not render the route: {0}")]
    Map(#[from] MapError),
}

/// The interactive shell failed.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write map to {path:?}: {source}")]
    WriteMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not render the route map: {0}")]
    Render(#[from] MapError),
}
