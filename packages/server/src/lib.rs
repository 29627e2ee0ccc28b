#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the Ghana solar radiation map.
//!
//! Serves an index page with every administrative region drawn on one
//! Leaflet map and a detail page per region. Each region popup shows the
//! average daily irradiance fetched from NASA POWER at the region's
//! centroid. Region boundaries are re-read from disk on every request and
//! nothing is cached between requests.

pub mod config;
mod handlers;

use std::path::PathBuf;

use actix_web::{App, HttpServer, middleware, web};
use ghana_solar_map_solar::SolarClient;

pub use config::ServerConfig;

/// Shared application state.
///
/// Holds configuration only; there is no mutable state shared between
/// requests.
pub struct AppState {
    /// Regions `GeoJSON` file, read on every request.
    pub regions_path: PathBuf,
    /// Solar irradiance API client.
    pub solar: SolarClient,
}

impl AppState {
    /// Builds the application state from the server configuration.
    #[must_use]
    pub fn new(config: &ServerConfig, client: reqwest::Client) -> Self {
        Self {
            regions_path: config.regions_path.clone(),
            solar: SolarClient::new(client, config.solar_api_url.clone()),
        }
    }
}

/// Registers the page and API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/region/{region_name}", web::get().to(handlers::region))
        .service(web::scope("/api").route("/health", web::get().to(handlers::health)));
}

/// Starts the solar map server.
///
/// Reads [`ServerConfig`] from the environment, initialises logging and
/// runs the Actix-Web HTTP server until it is stopped. The caller provides
/// the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env();

    log::info!("Region data: {}", config.regions_path.display());
    log::info!("Solar API: {}", config.solar_api_url);

    let state = web::Data::new(AppState::new(&config, reqwest::Client::new()));

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
