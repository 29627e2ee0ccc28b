//! Leaflet map builder.
//!
//! Layers are serialized to JSON and replayed by a small inline script, so
//! no JavaScript is generated per layer.

use askama::Template;
use geojson::{Feature, Geometry, Value};
use serde::Serialize;

use crate::RenderError;

/// Maximum popup width in pixels.
pub const POPUP_MAX_WIDTH: u32 = 300;

/// Fill and outline styling shared by every region polygon.
pub const REGION_STYLE: PolygonStyle = PolygonStyle {
    color: "blue",
    fill: true,
    fill_color: "yellow",
    fill_opacity: 0.4,
};

/// Leaflet path options for a polygon overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStyle {
    /// Outline colour.
    pub color: &'static str,
    /// Whether the polygon is filled.
    pub fill: bool,
    /// Fill colour.
    pub fill_color: &'static str,
    /// Fill opacity, 0.0 to 1.0.
    pub fill_opacity: f64,
}

/// HTML popup attached to a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    /// Popup body. Inserted as HTML, so callers escape untrusted text.
    pub html: String,
    /// Maximum popup width in pixels.
    pub max_width: u32,
}

impl Popup {
    /// Creates a popup with the default maximum width.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            max_width: POPUP_MAX_WIDTH,
        }
    }
}

/// A single overlay on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Filled polygon from `[lat, lon]` vertices.
    Polygon {
        /// Vertices in `[lat, lon]` order.
        locations: Vec<[f64; 2]>,
        /// Path styling.
        style: PolygonStyle,
        /// Popup shown on click.
        popup: Popup,
    },
    /// Raw `GeoJSON` feature drawn with Leaflet's default style.
    GeoJson {
        /// The feature, in `[lon, lat]` order as `GeoJSON` requires.
        data: Feature,
    },
    /// Point marker.
    Marker {
        /// Marker position as `[lat, lon]`.
        location: [f64; 2],
        /// Popup shown on click.
        popup: Popup,
    },
}

#[derive(Serialize)]
struct MapSpec<'a> {
    center: [f64; 2],
    zoom: u8,
    layers: &'a [Layer],
}

#[derive(Template)]
#[template(path = "map.html")]
struct MapFragment<'a> {
    element_id: &'a str,
    spec_json: &'a str,
}

/// An interactive map under construction.
#[derive(Debug, Clone)]
pub struct LeafletMap {
    element_id: String,
    center: (f64, f64),
    zoom: u8,
    layers: Vec<Layer>,
}

impl LeafletMap {
    /// Creates an empty map centred on `center` (`(lat, lon)`) at `zoom`.
    #[must_use]
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            element_id: format!("map_{}", uuid::Uuid::new_v4().simple()),
            center,
            zoom,
            layers: Vec::new(),
        }
    }

    /// DOM id of the map container.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Layers added so far, in drawing order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Adds a region polygon with [`REGION_STYLE`].
    pub fn add_polygon(&mut self, locations: &[(f64, f64)], popup: Popup) -> &mut Self {
        self.layers.push(Layer::Polygon {
            locations: locations.iter().map(|&(lat, lon)| [lat, lon]).collect(),
            style: REGION_STYLE,
            popup,
        });
        self
    }

    /// Adds a `GeoJSON` feature outline.
    pub fn add_geojson(&mut self, feature: Feature) -> &mut Self {
        self.layers.push(Layer::GeoJson { data: feature });
        self
    }

    /// Adds a marker at `location` (`(lat, lon)`).
    pub fn add_marker(&mut self, location: (f64, f64), popup: Popup) -> &mut Self {
        self.layers.push(Layer::Marker {
            location: [location.0, location.1],
            popup,
        });
        self
    }

    /// Renders the map as an embeddable HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the layers cannot be serialized or the
    /// fragment template fails to render.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let spec = MapSpec {
            center: [self.center.0, self.center.1],
            zoom: self.zoom,
            layers: &self.layers,
        };
        let spec_json = script_safe_json(&serde_json::to_string(&spec)?);

        Ok(MapFragment {
            element_id: &self.element_id,
            spec_json: &spec_json,
        }
        .render()?)
    }
}

/// Escapes every `<` as `\u003c` so embedded JSON cannot close the
/// surrounding `<script>` or open a comment inside it.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Outer rings of a region boundary as `(lat, lon)` vertex lists.
///
/// A `Polygon` yields its first ring. A `MultiPolygon` yields the first
/// ring of every sub-polygon, so each part gets its own overlay. Other
/// geometry types yield nothing.
#[must_use]
pub fn region_polygons(geometry: Option<&Geometry>) -> Vec<Vec<(f64, f64)>> {
    let Some(geometry) = geometry else {
        return Vec::new();
    };

    match &geometry.value {
        Value::Polygon(rings) => rings.first().map(|ring| swap_ring(ring)).into_iter().collect(),
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .filter_map(|rings| rings.first())
            .map(|ring| swap_ring(ring))
            .collect(),
        _ => Vec::new(),
    }
}

/// Converts `[lon, lat]` positions to `(lat, lon)` pairs, dropping
/// positions with fewer than two ordinates.
fn swap_ring(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lat, *lon)),
            _ => None,
        })
        .collect()
}
