//! Interactive route map rendering.
//!
//! A [`RouteMap`] is a plain description of the map (centre, markers, path)
//! that serialises with serde; [`RouteMap::render_html`] embeds it into a
//! standalone Leaflet page.

use serde::Serialize;

use crate::error::MapError;
use crate::polyline::Polyline;
use crate::route::Route;
use crate::traits::Coordinate;

const ROUTE_JSON_PLACEHOLDER: &str = "__ROUTE_JSON__";

const LEAFLET_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Optimized Route</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="">
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body, #map { height: 100%; margin: 0; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const route = __ROUTE_JSON__;
    const map = L.map('map').setView(route.center, route.options.zoom);
    L.tileLayer(route.options.tile_url, {
      maxZoom: 19,
      attribution: route.options.attribution
    }).addTo(map);
    for (const marker of route.markers) {
      const popup = document.createElement('span');
      popup.textContent = marker.label;
      L.marker(marker.position)
        .bindPopup(popup)
        .bindTooltip(popup.cloneNode(true))
        .addTo(map);
    }
    L.polyline(route.path.points, {
      color: route.options.line_color,
      weight: route.options.line_weight
    }).addTo(map);
  </script>
</body>
</html>
"##;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub zoom: u8,
    pub line_color: String,
    pub line_weight: u32,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: 13,
            line_color: "blue".to_string(),
            line_weight: 4,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

/// A marker for one stop of the tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// 1-based position in the tour.
    pub sequence: usize,
    pub node: usize,
    pub position: (f64, f64),
    /// Popup text, `"{sequence}. {address}"`.
    pub label: String,
}

/// Markers and path for a solved tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMap {
    pub center: (f64, f64),
    pub markers: Vec<MapMarker>,
    pub path: Polyline,
    pub options: MapOptions,
}

impl RouteMap {
    /// Places a marker on every stop in tour order and joins them with a line.
    ///
    /// The closing return to the start gets its own marker, so a tour of `n`
    /// nodes yields `n + 1` markers. The map is centred on the first stop.
    pub fn build(
        coordinates: &[Coordinate],
        addresses: &[String],
        route: &Route,
        options: MapOptions,
    ) -> Result<Self, MapError> {
        let markers = route
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, &node)| -> Result<MapMarker, MapError> {
                let position = coordinates.get(node).ok_or(MapError::UnknownNode { node })?;
                let address = addresses.get(node).ok_or(MapError::UnknownNode { node })?;
                Ok(MapMarker {
                    sequence: index + 1,
                    node,
                    position: position.as_tuple(),
                    label: format!("{}. {}", index + 1, address),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let center = markers.first().map(|marker| marker.position).ok_or(MapError::EmptyRoute)?;
        let path = Polyline::through(coordinates, route.nodes())?;

        Ok(Self {
            center,
            markers,
            path,
            options,
        })
    }

    /// Renders a standalone HTML document showing the map.
    pub fn render_html(&self) -> Result<String, MapError> {
        let json = serde_json::to_string(self).map_err(|err| MapError::Serialize(err.to_string()))?;
        // Keep user text from closing the script element.
        let json = json.replace('<', "\\u003c");
        Ok(LEAFLET_TEMPLATE.replace(ROUTE_JSON_PLACEHOLDER, &json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(40.86, -73.90),
            Coordinate::new(40.87, -73.86),
            Coordinate::new(40.89, -73.90),
        ]
    }

    fn addresses() -> Vec<String> {
        vec!["Depot".to_string(), "Client A".to_string(), "Client B".to_string()]
    }

    fn route() -> Route {
        Route::closed(&[0, 2, 1]).unwrap()
    }

    #[test]
    fn test_markers_follow_tour_order() {
        let map = RouteMap::build(&coords(), &addresses(), &route(), MapOptions::default())
            .unwrap();

        let labels: Vec<&str> = map.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["1. Depot", "2. Client B", "3. Client A", "4. Depot"]);
        assert_eq!(map.markers[1].position, (40.89, -73.90));
        assert_eq!(map.path.len(), 4);
    }

    #[test]
    fn test_centered_on_first_stop() {
        let tour = Route::closed(&[1, 0, 2]).unwrap();
        let map = RouteMap::build(&coords(), &addresses(), &tour, MapOptions::default()).unwrap();
        assert_eq!(map.center, (40.87, -73.86));
        assert_eq!(map.options.zoom, 13);
    }

    #[test]
    fn test_unknown_node_is_error() {
        let names = addresses();
        let err = RouteMap::build(&coords(), &names[..2], &route(), MapOptions::default())
            .unwrap_err();
        assert_eq!(err, MapError::UnknownNode { node: 2 });
    }

    #[test]
    fn test_render_html_embeds_route() {
        let map = RouteMap::build(&coords(), &addresses(), &route(), MapOptions::default())
            .unwrap();
        let html = map.render_html().unwrap();

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("\"label\":\"2. Client B\""));
        assert!(html.contains("\"line_color\":\"blue\""));
        assert!(!html.contains(ROUTE_JSON_PLACEHOLDER));
    }

    #[test]
    fn test_render_html_escapes_markup_in_addresses() {
        let mut names = addresses();
        names[1] = "</script><script>alert(1)</script>".to_string();
        let map = RouteMap::build(&coords(), &names, &route(), MapOptions::default()).unwrap();
        let html = map.render_html().unwrap();

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("\\u003c/script>\\u003cscript>alert(1)"));
    }
}
