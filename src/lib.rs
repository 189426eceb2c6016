//! route-optimizer core
//!
//! Geocodes a start address and a list of client addresses, orders the
//! visits into a short closed tour, and renders the result as a step list
//! and an interactive map.

pub mod config;
pub mod error;
pub mod geocoder;
pub mod geodesic;
pub mod map;
pub mod matrix;
pub mod nominatim;
pub mod planner;
pub mod polyline;
pub mod report;
pub mod retry;
pub mod route;
pub mod shell;
pub mod solver;
pub mod traits;

#[doc(hidden)]
pub mod test_support;
