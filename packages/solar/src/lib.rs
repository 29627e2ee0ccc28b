#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! NASA POWER solar irradiance client.
//!
//! Fetches a daily `ALLSKY_SFC_SW_DWN` series for a single point and
//! reduces it to its arithmetic mean. One request per call: no retries,
//! no caching, and no timeout beyond what `reqwest` applies by default.
//!
//! See <https://power.larc.nasa.gov/docs/services/api/temporal/daily/>

pub mod power;

pub use power::{DEFAULT_BASE_URL, SolarClient, parse_series, series_average};

use thiserror::Error;

/// Errors from a solar irradiance fetch.
///
/// [`SolarClient::fetch_average`] never returns these; it logs them and
/// reports [`ghana_solar_map_solar_models::SolarAverage::Unavailable`].
#[derive(Debug, Error)]
pub enum SolarError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body is not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response is well-formed but lacks the irradiance series.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what is missing.
        message: String,
    },

    /// The irradiance series has no values.
    #[error("Empty irradiance series")]
    EmptySeries,
}
