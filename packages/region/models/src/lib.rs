#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative region and centroid types.
//!
//! A [`Region`] is one feature of the regions `GeoJSON` file: a name taken
//! from `properties.region` and the raw boundary geometry. Regions are
//! read-only snapshots of the source file and carry no identity beyond
//! their name.

use geojson::{Feature, Geometry, JsonObject};

/// Property key holding the region name in the source `GeoJSON`.
pub const REGION_NAME_PROPERTY: &str = "region";

/// Name used for features that carry no `region` property.
pub const UNKNOWN_REGION_NAME: &str = "Unknown Region";

/// An administrative region loaded from the boundaries file.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Region name (e.g. "Greater Accra").
    pub name: String,
    /// Boundary geometry in `[longitude, latitude]` order. `None` when the
    /// feature has a `null` geometry.
    pub geometry: Option<Geometry>,
}

impl Region {
    /// Rebuilds a `GeoJSON` feature for this region, with the name stored
    /// under [`REGION_NAME_PROPERTY`].
    #[must_use]
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert(
            REGION_NAME_PROPERTY.to_string(),
            serde_json::Value::String(self.name.clone()),
        );

        Feature {
            bbox: None,
            geometry: self.geometry.clone(),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl From<Feature> for Region {
    fn from(feature: Feature) -> Self {
        let name = feature
            .property(REGION_NAME_PROPERTY)
            .and_then(serde_json::Value::as_str)
            .unwrap_or(UNKNOWN_REGION_NAME)
            .to_string();

        Self {
            name,
            geometry: feature.geometry,
        }
    }
}

/// Approximate centre of a region: the unweighted mean of its outer-ring
/// vertices, not an area-weighted centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean latitude of the ring.
    pub latitude: f64,
    /// Mean longitude of the ring.
    pub longitude: f64,
}

impl Centroid {
    /// Creates a centroid from a latitude/longitude pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the centroid as a `(lat, lon)` tuple, the order map
    /// libraries expect.
    #[must_use]
    pub const fn lat_lon(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(properties: serde_json::Value) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::Point(vec![0.0, 0.0]))),
            id: None,
            properties: properties.as_object().cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn takes_name_from_region_property() {
        let region = Region::from(feature(serde_json::json!({ "region": "Volta" })));
        assert_eq!(region.name, "Volta");
    }

    #[test]
    fn falls_back_to_unknown_region_name() {
        let region = Region::from(feature(serde_json::json!({ "name": "Volta" })));
        assert_eq!(region.name, UNKNOWN_REGION_NAME);

        let region = Region::from(feature(serde_json::json!({ "region": 7 })));
        assert_eq!(region.name, UNKNOWN_REGION_NAME);
    }

    #[test]
    fn to_feature_keeps_name_and_geometry() {
        let region = Region::from(feature(serde_json::json!({ "region": "Ashanti" })));
        let rebuilt = region.to_feature();

        assert_eq!(
            rebuilt.property(REGION_NAME_PROPERTY),
            Some(&serde_json::json!("Ashanti"))
        );
        assert_eq!(rebuilt.geometry, region.geometry);
    }
}
