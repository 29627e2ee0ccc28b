//! POWER daily point endpoint.

use std::collections::BTreeMap;

use ghana_solar_map_solar_models::{DateRange, IRRADIANCE_PARAMETER, PowerResponse, SolarAverage};

use crate::SolarError;

/// Default POWER daily point-query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

/// POWER user community; `AG` selects the agroclimatology unit set.
const COMMUNITY: &str = "AG";

/// Client for the POWER irradiance endpoint.
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct SolarClient {
    client: reqwest::Client,
    base_url: String,
}

impl SolarClient {
    /// Creates a client that queries `base_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the mean irradiance at a point over `range`.
    ///
    /// Any failure (transport, non-success status, malformed body, empty
    /// series) is logged and reported as [`SolarAverage::Unavailable`].
    pub async fn fetch_average(
        &self,
        latitude: f64,
        longitude: f64,
        range: &DateRange,
    ) -> SolarAverage {
        match self.try_fetch_average(latitude, longitude, range).await {
            Ok(average) => SolarAverage::Available(average),
            Err(e) => {
                log::warn!("Error fetching solar data for ({latitude}, {longitude}): {e}");
                SolarAverage::Unavailable
            }
        }
    }

    /// Fetches the mean irradiance at a point over `range`, surfacing the
    /// failure cause.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError`] if the request fails, the status is not a
    /// success, the body cannot be parsed, or the series is empty.
    pub async fn try_fetch_average(
        &self,
        latitude: f64,
        longitude: f64,
        range: &DateRange,
    ) -> Result<f64, SolarError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("start", range.start_param()),
                ("end", range.end_param()),
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("parameters", IRRADIANCE_PARAMETER.to_string()),
                ("community", COMMUNITY.to_string()),
                ("format", "JSON".to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SolarError::Status(resp.status()));
        }

        let body = resp.text().await?;
        let series = parse_series(&body)?;

        log::debug!(
            "Fetched {} irradiance values for ({latitude}, {longitude})",
            series.len()
        );

        series_average(&series).ok_or(SolarError::EmptySeries)
    }
}

/// Extracts the `ALLSKY_SFC_SW_DWN` date → value series from a POWER
/// response body.
///
/// # Errors
///
/// Returns [`SolarError::Json`] if the body does not match the POWER
/// response shape, or [`SolarError::Parse`] if the parameter is absent.
pub fn parse_series(body: &str) -> Result<BTreeMap<String, f64>, SolarError> {
    let mut response: PowerResponse = serde_json::from_str(body)?;

    response
        .properties
        .parameter
        .remove(IRRADIANCE_PARAMETER)
        .ok_or_else(|| SolarError::Parse {
            message: format!("No {IRRADIANCE_PARAMETER} series in POWER response"),
        })
}

/// Arithmetic mean of every value in the series, or `None` if it is empty.
#[must_use]
pub fn series_average(series: &BTreeMap<String, f64>) -> Option<f64> {
    if series.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = series.len() as f64;

    Some(series.values().sum::<f64>() / count)
}
