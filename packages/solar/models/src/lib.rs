#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Solar irradiance request and response types.
//!
//! Covers the date range sent to the NASA POWER API, the subset of its
//! JSON response that carries the irradiance series, and the
//! [`SolarAverage`] value shown in map popups.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// POWER parameter for all-sky surface shortwave downward irradiance.
pub const IRRADIANCE_PARAMETER: &str = "ALLSKY_SFC_SW_DWN";

/// Unit of [`IRRADIANCE_PARAMETER`] values.
pub const IRRADIANCE_UNIT: &str = "MJ/m²";

/// Text shown in place of a number when no average is available.
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

/// Wire format for API dates.
const API_DATE_FORMAT: &str = "%Y%m%d";

/// Inclusive date range for an irradiance query.
///
/// Ordering and length are not validated; the API decides what to do with
/// an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Start date as an 8-digit `YYYYMMDD` string.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(API_DATE_FORMAT).to_string()
    }

    /// End date as an 8-digit `YYYYMMDD` string.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(API_DATE_FORMAT).to_string()
    }
}

/// Average irradiance for one location, or the "unavailable" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarAverage {
    /// Arithmetic mean of the returned series.
    Available(f64),
    /// The fetch failed or returned an empty series.
    Unavailable,
}

impl fmt::Display for SolarAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(value) => write!(f, "{value:.2}"),
            Self::Unavailable => f.write_str(DATA_UNAVAILABLE),
        }
    }
}

/// Top-level POWER point-query response. Only the fields this crate reads
/// are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    /// Feature properties holding the parameter series.
    pub properties: PowerProperties,
}

/// `properties` object of a [`PowerResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    /// Parameter name → (`YYYYMMDD` date → value).
    pub parameter: BTreeMap<String, BTreeMap<String, f64>>,
}
