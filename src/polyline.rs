//! Polyline representation for tour geometries.
//!
//! Points are kept decoded as `(latitude, longitude)` pairs; they are only
//! serialised at the rendering boundary.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::traits::Coordinate;

/// A polyline as an ordered list of `(lat, lng)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Traces `nodes` through `coordinates`, one point per node.
    pub fn through(coordinates: &[Coordinate], nodes: &[usize]) -> Result<Self, MapError> {
        let points = nodes
            .iter()
            .map(|&node| {
                coordinates
                    .get(node)
                    .map(Coordinate::as_tuple)
                    .ok_or(MapError::UnknownNode { node })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
