//! Fail-fast batch geocoding with bounded retry.

use crate::error::PlanError;
use crate::retry::{RetryPolicy, Sleeper};
use crate::traits::{Coordinate, Geocoder};

/// Geocodes every address in order, one coordinate per address.
///
/// The first address that exhausts its attempts aborts the batch; later
/// addresses are never looked up.
pub fn geocode_all<G>(
    geocoder: &G,
    addresses: &[String],
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
) -> Result<Vec<Coordinate>, PlanError>
where
    G: Geocoder + ?Sized,
{
    addresses
        .iter()
        .map(|address| geocode_with_retry(geocoder, address, policy, sleeper))
        .collect()
}

/// Looks up one address, retrying per `policy`.
pub fn geocode_with_retry<G>(
    geocoder: &G,
    address: &str,
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
) -> Result<Coordinate, PlanError>
where
    G: Geocoder + ?Sized,
{
    let mut attempts = 0;
    let mut last_error = None;

    while attempts < policy.max_attempts {
        attempts += 1;
        match geocoder.geocode(address) {
            Ok(Some(coordinate)) => {
                tracing::info!(
                    address,
                    attempt = attempts,
                    lat = coordinate.lat,
                    lng = coordinate.lng,
                    "geocoded"
                );
                sleeper.sleep(policy.delay_after(true));
                return Ok(coordinate);
            }
            Ok(None) => {
                tracing::warn!(address, attempt = attempts, "no geocoding match");
                sleeper.sleep(policy.delay_after(true));
            }
            Err(err) => {
                tracing::warn!(
                    address,
                    attempt = attempts,
                    error = %err,
                    "geocoding attempt failed"
                );
                last_error = Some(err.to_string());
                sleeper.sleep(policy.delay_after(false));
            }
        }
    }

    Err(PlanError::Geocode {
        address: address.to_string(),
        attempts,
        last_error,
    })
}
