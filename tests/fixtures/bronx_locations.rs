//! Bronx, NY addresses for realistic test fixtures.
//!
//! Coordinates are approximate OpenStreetMap positions for each address;
//! close enough for geodesic distances to be representative.

use route_optimizer::test_support::StubGeocoder;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(address: &'static str, lat: f64, lng: f64) -> Self {
        Self { address, lat, lng }
    }
}

/// Start location (Bronx County Courthouse).
pub const DEPOT: Location = Location::new("851 GRAND CONCOURSE, BRONX, NY", 40.8268, -73.9226);

pub const CLIENTS: &[Location] = &[
    Location::new("3202 BRONXWOOD AVENUE, BRONX, NY", 40.8735, -73.8595),
    Location::new("275 WEST 238th ST, BRONX, NY", 40.8850, -73.9050),
    Location::new("2720 GRAND CONCOURSE, BRONX, NY", 40.8660, -73.8940),
    Location::new("14 WEST 184th ST, BRONX, NY", 40.8590, -73.9040),
    Location::new("1601 MACOMBS ROAD, BRONX, NY", 40.8445, -73.9170),
];

/// Stub geocoder that resolves the depot and every client.
pub fn bronx_geocoder() -> StubGeocoder {
    std::iter::once(&DEPOT)
        .chain(CLIENTS.iter())
        .fold(StubGeocoder::new(), |geocoder, location| {
            geocoder.with_location(location.address, location.lat, location.lng)
        })
}

/// Client addresses as the shell would receive them, one per line.
pub fn client_block(clients: &[Location]) -> String {
    clients
        .iter()
        .map(|location| location.address)
        .collect::<Vec<_>>()
        .join("\n")
}
