//! Popup text for region overlays.

use askama::Template;
use ghana_solar_map_solar_models::{IRRADIANCE_UNIT, SolarAverage};

use crate::RenderError;

#[derive(Template)]
#[template(
    source = "<strong>Region:</strong> {{ region_name }}<br><strong>Avg Solar Radiation:</strong> {{ average|safe }} {{ unit|safe }}",
    ext = "html"
)]
struct PopupText<'a> {
    region_name: &'a str,
    average: SolarAverage,
    unit: &'static str,
}

/// Builds the popup body for a region: its name and average irradiance,
/// or `Data unavailable` when no average could be computed.
///
/// The region name is HTML-escaped; the surrounding markup is not.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the popup fails to render.
pub fn popup_text(region_name: &str, average: SolarAverage) -> Result<String, RenderError> {
    Ok(PopupText {
        region_name,
        average,
        unit: IRRADIANCE_UNIT,
    }
    .render()?)
}
