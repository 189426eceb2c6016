//! Core collaborator traits for the route optimizer.
//!
//! Each external capability (address lookup, distance estimation, tour
//! solving) sits behind a narrow trait so any compliant implementation can
//! be swapped in.

use serde::{Deserialize, Serialize};

use crate::error::{GeocodeError, SolveError};
use crate::matrix::DistanceMatrix;
use crate::route::Route;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the position as a `(lat, lng)` tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Whether the latitude and longitude fall inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Resolves a free-text address to a coordinate.
///
/// `Ok(None)` means the lookup completed but found no match. `Err` means
/// the lookup itself failed and may be worth retrying.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

/// Provides a distance matrix for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> DistanceMatrix;
}

/// Computes a closed single-vehicle tour over a cost matrix.
pub trait RouteSolver {
    /// Returns a tour that starts and ends at `start` and visits every
    /// other node exactly once.
    fn solve(&self, matrix: &DistanceMatrix, start: usize) -> Result<Route, SolveError>;
}
