#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Leaflet map fragments and HTML pages for the solar map.
//!
//! [`leaflet::LeafletMap`] collects polygon, `GeoJSON` and marker layers
//! and renders them as a self-contained `<div>` + `<script>` fragment.
//! [`pages`] wraps a fragment in the full index or region page.

pub mod leaflet;
pub mod pages;
pub mod popup;

use thiserror::Error;

/// Errors that can occur while rendering maps or pages.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Map layers could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
