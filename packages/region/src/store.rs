//! Loads region boundaries from the `GeoJSON` file on disk.

use std::path::Path;

use geojson::FeatureCollection;
use ghana_solar_map_region_models::Region;

use crate::RegionError;

/// Reads and parses the regions `FeatureCollection` at `path`.
///
/// Feature order is preserved. Features without a `region` property are
/// named [`ghana_solar_map_region_models::UNKNOWN_REGION_NAME`].
///
/// # Errors
///
/// Returns [`RegionError::Io`] if the file cannot be read, or
/// [`RegionError::Parse`] if it is not a `GeoJSON` `FeatureCollection`.
pub fn load_regions(path: &Path) -> Result<Vec<Region>, RegionError> {
    let contents = std::fs::read_to_string(path)?;
    let collection: FeatureCollection = contents.parse()?;

    log::debug!(
        "Loaded {} region features from {}",
        collection.features.len(),
        path.display()
    );

    Ok(collection.features.into_iter().map(Region::from).collect())
}

/// Returns the first region whose name matches `name` exactly.
#[must_use]
pub fn find_region<'a>(regions: &'a [Region], name: &str) -> Option<&'a Region> {
    regions.iter().find(|region| region.name == name)
}
