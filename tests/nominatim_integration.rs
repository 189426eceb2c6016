//! Live geocoding tests against a local Nominatim container.
//!
//! The container imports the Monaco extract on first start, which takes
//! several minutes. Run with `cargo test -- --ignored` when Docker is
//! available.

use std::time::{Duration, Instant};

use testcontainers::core::IntoContainerPort;
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, ReuseDirective, TestcontainersError};

use route_optimizer::nominatim::{NominatimClient, NominatimConfig};
use route_optimizer::planner::RoutePlanner;
use route_optimizer::retry::RetryPolicy;
use route_optimizer::traits::{Coordinate, Geocoder};

const MONACO_PBF: &str = "https://download.geofabrik.de/europe/monaco-latest.osm.pbf";

fn nominatim_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let image = GenericImage::new("mediagis/nominatim", "4.4")
        .with_exposed_port(8080.tcp())
        .with_env_var("PBF_URL", MONACO_PBF)
        .with_container_name("nominatim-monaco")
        .with_startup_timeout(Duration::from_secs(60))
        .with_reuse(ReuseDirective::Always);

    let container = image.start()?;
    let port = container.get_host_port_ipv4(8080.tcp())?;
    let base_url = format!("http://127.0.0.1:{}", port);

    Ok((container, base_url))
}

fn client(base_url: &str) -> NominatimClient {
    NominatimClient::new(NominatimConfig {
        base_url: base_url.to_string(),
        timeout_secs: 30,
        ..NominatimConfig::default()
    })
    .expect("build Nominatim client")
}

/// Polls until the import finishes and the service answers a lookup.
fn wait_for_import(client: &NominatimClient, probe: &str) -> Option<Coordinate> {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(900) {
        if let Ok(Some(coordinate)) = client.geocode(probe) {
            return Some(coordinate);
        }
        std::thread::sleep(Duration::from_secs(5));
    }
    None
}

fn in_monaco(coordinate: Coordinate) -> bool {
    (43.72..43.76).contains(&coordinate.lat) && (7.40..7.44).contains(&coordinate.lng)
}

#[test]
#[ignore = "requires Docker and a Nominatim data import"]
fn nominatim_resolves_known_address() {
    let (container, base_url) = nominatim_container().expect("start Nominatim container");
    let client = client(&base_url);

    let coordinate =
        wait_for_import(&client, "Place du Casino, Monaco").expect("Nominatim never became ready");
    assert!(in_monaco(coordinate), "unexpected position {coordinate:?}");

    assert_eq!(client.geocode("Zzyzx Nonexistent Boulevard 99999").unwrap(), None);

    drop(container);
}

#[test]
#[ignore = "requires Docker and a Nominatim data import"]
fn nominatim_backed_pipeline_plans_route() {
    let (container, base_url) = nominatim_container().expect("start Nominatim container");
    let client = client(&base_url);
    wait_for_import(&client, "Place du Casino, Monaco").expect("Nominatim never became ready");

    let planner = RoutePlanner::new(client).with_retry(RetryPolicy::immediate(3));
    let plan = planner
        .plan(
            "Place du Casino, Monaco",
            "Boulevard Albert 1er, Monaco\nAvenue de la Costa, Monaco\nRue Grimaldi, Monaco",
        )
        .expect("plan Monaco route");

    assert!(plan.route.is_closed_tour(4));
    assert!(plan.coordinates.iter().copied().all(in_monaco));
    assert!(plan.report.total_meters > 0);

    drop(container);
}
