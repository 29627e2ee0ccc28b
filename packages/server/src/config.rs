//! Server configuration read from the environment at start-up.

use std::path::PathBuf;

use ghana_solar_map_solar::DEFAULT_BASE_URL;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the regions `GeoJSON` file.
pub const DEFAULT_REGIONS_PATH: &str = "data/ghana_regions.json";

/// Runtime configuration for the solar map server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Regions `GeoJSON` file (`REGIONS_PATH`).
    pub regions_path: PathBuf,
    /// Solar irradiance endpoint (`SOLAR_API_URL`).
    pub solar_api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            regions_path: PathBuf::from(DEFAULT_REGIONS_PATH),
            solar_api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Unset
    /// variables, and a `PORT` that is not a valid port number, fall back
    /// to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            regions_path: lookup("REGIONS_PATH").map_or(defaults.regions_path, PathBuf::from),
            solar_api_url: lookup("SOLAR_API_URL").unwrap_or(defaults.solar_api_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn uses_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.regions_path, PathBuf::from("data/ghana_regions.json"));
        assert_eq!(
            config.solar_api_url,
            "https://power.larc.nasa.gov/api/temporal/daily/point"
        );
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "9000"),
            ("REGIONS_PATH", "/srv/regions.geojson"),
            ("SOLAR_API_URL", "http://localhost:9999/point"),
        ]));

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.regions_path, PathBuf::from("/srv/regions.geojson"));
        assert_eq!(config.solar_api_url, "http://localhost:9999/point");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
