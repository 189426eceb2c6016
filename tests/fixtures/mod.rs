//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data including:
//! - Bronx client addresses with their approximate coordinates
//! - A stub geocoder preloaded with those addresses

pub mod bronx_locations;

pub use bronx_locations::*;
