//! Naive centroid: the mean of a ring's vertex coordinates.
//!
//! This is not an area-weighted centroid. It leans toward
//! whichever part of the boundary has the densest vertex sampling, and for
//! a `MultiPolygon` only the first polygon contributes.

use geojson::{Geometry, Value};
use ghana_solar_map_region_models::Centroid;

/// Computes the approximate centroid of a region boundary.
///
/// - `Polygon`: mean of the first ring's vertices.
/// - `MultiPolygon`: mean of the first ring of the first polygon only.
/// - Any other geometry type, a missing geometry, or an empty ring: `None`.
#[must_use]
pub fn centroid(geometry: Option<&Geometry>) -> Option<Centroid> {
    let ring = match &geometry?.value {
        Value::Polygon(rings) => rings.first()?,
        Value::MultiPolygon(polygons) => polygons.first()?.first()?,
        _ => return None,
    };

    ring_mean(ring)
}

/// Averages `[lon, lat]` positions into a [`Centroid`].
fn ring_mean(ring: &[Vec<f64>]) -> Option<Centroid> {
    if ring.is_empty() {
        return None;
    }

    let mut lon_sum = 0.0;
    let mut lat_sum = 0.0;

    for position in ring {
        let [lon, lat, ..] = position.as_slice() else {
            return None;
        };
        lon_sum += lon;
        lat_sum += lat;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = ring.len() as f64;

    Some(Centroid::new(lat_sum / count, lon_sum / count))
}
