//! Test utilities for geocoding.
//!
//! [`StubGeocoder`] is a deterministic [`Geocoder`] that answers from
//! pre-configured responses instead of calling a live service.
//!
//! # Example
//!
//! ```
//! use route_optimizer::test_support::{StubGeocoder, StubReply};
//! use route_optimizer::traits::Geocoder;
//!
//! let geocoder = StubGeocoder::new()
//!     .with_location("depot", 40.85, -73.90)
//!     .with_script("flaky", vec![StubReply::Error, StubReply::Found(40.86, -73.88)]);
//!
//! assert!(geocoder.geocode("depot").unwrap().is_some());
//! assert!(geocoder.geocode("flaky").is_err());
//! assert!(geocoder.geocode("flaky").unwrap().is_some());
//! assert_eq!(geocoder.calls("flaky"), 2);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::GeocodeError;
use crate::traits::{Coordinate, Geocoder};

/// One scripted lookup outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StubReply {
    Found(f64, f64),
    NotFound,
    Error,
}

/// Stub `Geocoder` for testing.
///
/// Scripted replies are consumed in order. Once a script runs out, fixed
/// locations answer; unknown addresses always fail with
/// [`GeocodeError::Unavailable`].
#[derive(Debug, Default)]
pub struct StubGeocoder {
    fixed: HashMap<String, Coordinate>,
    scripts: RefCell<HashMap<String, VecDeque<StubReply>>>,
    calls: RefCell<HashMap<String, usize>>,
}

impl StubGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always resolve `address` to the given position.
    pub fn with_location(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.fixed.insert(address.to_string(), Coordinate::new(lat, lng));
        self
    }

    /// Answer successive lookups of `address` with `replies`.
    pub fn with_script(self, address: &str, replies: Vec<StubReply>) -> Self {
        self.scripts
            .borrow_mut()
            .insert(address.to_string(), replies.into_iter().collect());
        self
    }

    /// Number of lookups made for `address`.
    pub fn calls(&self, address: &str) -> usize {
        self.calls.borrow().get(address).copied().unwrap_or(0)
    }

    /// Total lookups across all addresses.
    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        *self.calls.borrow_mut().entry(address.to_string()).or_default() += 1;

        let scripted = self
            .scripts
            .borrow_mut()
            .get_mut(address)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(StubReply::Found(lat, lng)) => Ok(Some(Coordinate::new(lat, lng))),
            Some(StubReply::NotFound) => Ok(None),
            Some(StubReply::Error) => {
                Err(GeocodeError::Unavailable("scripted failure".to_string()))
            }
            None => match self.fixed.get(address) {
                Some(coordinate) => Ok(Some(*coordinate)),
                None => Err(GeocodeError::Unavailable(format!(
                    "no stub response for {address:?}"
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_location_repeats() {
        let geocoder = StubGeocoder::new().with_location("a", 1.0, 2.0);
        for _ in 0..3 {
            assert_eq!(geocoder.geocode("a").unwrap(), Some(Coordinate::new(1.0, 2.0)));
        }
        assert_eq!(geocoder.calls("a"), 3);
    }

    #[test]
    fn test_script_falls_back_to_fixed() {
        let geocoder = StubGeocoder::new()
            .with_location("a", 1.0, 2.0)
            .with_script("a", vec![StubReply::NotFound]);
        assert_eq!(geocoder.geocode("a").unwrap(), None);
        assert_eq!(geocoder.geocode("a").unwrap(), Some(Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn test_unknown_address_errors() {
        let geocoder = StubGeocoder::new();
        let err = geocoder.geocode("?").unwrap_err();
        assert!(matches!(err, GeocodeError::Unavailable(_)));
        assert_eq!(geocoder.total_calls(), 1);
    }
}
