//! Full HTML pages wrapping a map fragment.

use askama::Template;

use crate::RenderError;

/// Overview page with every region on one map.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// Map fragment from [`crate::leaflet::LeafletMap::to_html`].
    pub map: String,
    /// Region names, in source order, linked to their detail pages.
    pub regions: Vec<String>,
}

/// Detail page for a single region.
#[derive(Debug, Template)]
#[template(path = "region.html")]
pub struct RegionPage {
    /// Region name as requested.
    pub region_name: String,
    /// Map fragment from [`crate::leaflet::LeafletMap::to_html`].
    pub map: String,
}

/// Renders any page template to a string.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if rendering fails.
pub fn render_page(page: &impl Template) -> Result<String, RenderError> {
    Ok(page.render()?)
}
