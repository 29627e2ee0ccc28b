#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region boundary loading and naive centroid calculation.
//!
//! Reads Ghana's administrative region polygons from a local `GeoJSON`
//! `FeatureCollection` and derives an approximate centre for each region
//! by averaging the vertices of its outer ring. Nothing is cached: every
//! call to [`store::load_regions`] re-reads the file.

pub mod centroid;
pub mod store;

pub use centroid::centroid;
pub use store::{find_region, load_regions};

use thiserror::Error;

/// Errors that can occur while loading region boundaries.
#[derive(Debug, Error)]
pub enum RegionError {
    /// The boundaries file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid `GeoJSON` `FeatureCollection`.
    #[error("GeoJSON error: {0}")]
    Parse(#[from] geojson::Error),
}
