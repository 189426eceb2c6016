//! Step-by-step distance report for a solved tour.

use std::fmt;

use serde::Serialize;

use crate::error::MapError;
use crate::matrix::DistanceMatrix;
use crate::route::Route;

/// One leg of the tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    /// 1-based leg number.
    pub step: usize,
    pub from: usize,
    pub to: usize,
    pub from_address: String,
    pub to_address: String,
    pub meters: u64,
    /// Whether the leg leaves the start location.
    pub departs_start: bool,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.departs_start { " (Start)" } else { "" };
        write!(
            f,
            "{}. {}{} → {} ({} m)",
            self.step, self.from_address, label, self.to_address, self.meters
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub legs: Vec<Leg>,
    pub total_meters: u64,
}

impl RouteReport {
    /// Lists every leg of `route` with its distance from `matrix`.
    ///
    /// The total is the exact sum of the leg distances.
    pub fn build(
        addresses: &[String],
        matrix: &DistanceMatrix,
        route: &Route,
    ) -> Result<Self, MapError> {
        let start = route.start();

        let legs = route
            .legs()
            .enumerate()
            .map(|(index, (from, to))| -> Result<Leg, MapError> {
                let from_address = addresses
                    .get(from)
                    .ok_or(MapError::UnknownNode { node: from })?;
                let to_address = addresses
                    .get(to)
                    .ok_or(MapError::UnknownNode { node: to })?;
                let meters = matrix
                    .get(from, to)
                    .ok_or(MapError::UnknownNode { node: from.max(to) })?;
                Ok(Leg {
                    step: index + 1,
                    from,
                    to,
                    from_address: from_address.clone(),
                    to_address: to_address.clone(),
                    meters,
                    departs_start: Some(from) == start,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_meters = legs.iter().map(|leg| leg.meters).sum();

        Ok(Self { legs, total_meters })
    }

    /// Total tour length in kilometres.
    pub fn total_km(&self) -> f64 {
        self.total_meters as f64 / 1000.0
    }

    /// The total line, e.g. `"Total distance: 12.34 km"`.
    pub fn total_line(&self) -> String {
        format!("Total distance: {:.2} km", self.total_km())
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leg in &self.legs {
            writeln!(f, "{leg}")?;
        }
        write!(f, "{}", self.total_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses() -> Vec<String> {
        vec!["Depot".to_string(), "Alpha".to_string(), "Beta".to_string()]
    }

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 1200, 3400],
            vec![1200, 0, 2500],
            vec![3400, 2500, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_legs_and_total() {
        let route = Route::closed(&[0, 1, 2]).unwrap();
        let report = RouteReport::build(&addresses(), &matrix(), &route).unwrap();

        assert_eq!(report.legs.len(), 3);
        assert_eq!(report.legs[0].to_string(), "1. Depot (Start) → Alpha (1200 m)");
        assert_eq!(report.legs[1].to_string(), "2. Alpha → Beta (2500 m)");
        assert_eq!(report.legs[2].to_string(), "3. Beta → Depot (3400 m)");
        assert_eq!(report.total_meters, route.total_distance(&matrix()));
        assert_eq!(report.total_line(), "Total distance: 7.10 km");
    }

    #[test]
    fn test_start_label_follows_route_start() {
        let route = Route::closed(&[2, 0, 1]).unwrap();
        let report = RouteReport::build(&addresses(), &matrix(), &route).unwrap();
        let starts: Vec<bool> = report.legs.iter().map(|leg| leg.departs_start).collect();
        assert_eq!(starts, vec![true, false, false]);
    }

    #[test]
    fn test_single_stop_report() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0]]).unwrap();
        let route = Route::closed(&[0]).unwrap();
        let report = RouteReport::build(&addresses()[..1], &matrix, &route).unwrap();
        assert_eq!(report.legs[0].to_string(), "1. Depot (Start) → Depot (0 m)");
        assert_eq!(report.total_line(), "Total distance: 0.00 km");
    }

    #[test]
    fn test_display_lists_legs_then_total() {
        let route = Route::closed(&[0, 2, 1]).unwrap();
        let text = RouteReport::build(&addresses(), &matrix(), &route).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Total distance: 7.10 km");
    }

    #[test]
    fn test_missing_address_is_error() {
        let route = Route::closed(&[0, 1, 2]).unwrap();
        let err = RouteReport::build(&addresses()[..2], &matrix(), &route).unwrap_err();
        assert_eq!(err, MapError::UnknownNode { node: 2 });
    }
}
