//! Nominatim HTTP adapter for address lookups.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use serde::Deserialize;

use crate::error::GeocodeError;
use crate::traits::{Coordinate, Geocoder};

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Sent as `User-Agent`; the public instance rejects anonymous clients.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Optional comma-separated ISO 3166-1 alpha-2 filter, e.g. "us".
    pub country_codes: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "route-optimizer".to_string(),
            timeout_secs: 10,
            country_codes: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let mut query = vec![("q", address), ("format", "jsonv2"), ("limit", "1")];
        if let Some(codes) = self.config.country_codes.as_deref() {
            query.push(("countrycodes", codes));
        }

        let response = self.client.get(self.search_url()).query(&query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Unavailable(format!("HTTP {status}")));
        }

        first_coordinate(response.json::<Vec<NominatimPlace>>()?)
    }
}

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

fn first_coordinate(places: Vec<NominatimPlace>) -> Result<Option<Coordinate>, GeocodeError> {
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let parsed = place
        .lat
        .trim()
        .parse::<f64>()
        .ok()
        .zip(place.lon.trim().parse::<f64>().ok())
        .map(Coordinate::from)
        .filter(Coordinate::is_valid);

    match parsed {
        Some(coordinate) => {
            tracing::debug!(
                display_name = place.display_name.as_deref().unwrap_or(""),
                "nominatim match"
            );
            Ok(Some(coordinate))
        }
        None => Err(GeocodeError::InvalidCoordinate {
            lat: place.lat,
            lng: place.lon,
        }),
    }
}
