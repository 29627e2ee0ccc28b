//! HTTP handler functions for the solar map pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, web};
use chrono::NaiveDate;
use ghana_solar_map_region::{centroid, find_region, load_regions};
use ghana_solar_map_region_models::{Centroid, Region};
use ghana_solar_map_render::RenderError;
use ghana_solar_map_render::leaflet::{LeafletMap, Popup, region_polygons};
use ghana_solar_map_render::pages::{IndexPage, RegionPage, render_page};
use ghana_solar_map_render::popup::popup_text;
use ghana_solar_map_server_models::ApiHealth;
use ghana_solar_map_solar_models::{DateRange, SolarAverage};

use crate::AppState;

/// Centre of Ghana, used for the overview map.
const INDEX_CENTER: (f64, f64) = (7.9465, -1.0232);
const INDEX_ZOOM: u8 = 6;
const REGION_ZOOM: u8 = 8;

/// Irradiance window averaged on the overview map.
const INDEX_RANGE: DateRange = DateRange::new(date(2019, 1, 1), date(2020, 1, 7));

/// Irradiance window averaged on a region page.
const REGION_RANGE: DateRange = DateRange::new(date(2022, 1, 1), date(2022, 1, 7));

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /`
///
/// Draws every region on one map. Regions without a usable centroid are
/// skipped and left out of the link list; the solar API is queried once per
/// remaining region, in order.
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let Some(regions) = read_regions(&state).await else {
        return plain_text(HttpResponse::InternalServerError(), "Error loading region data");
    };

    match index_page(&state, &regions).await {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => {
            log::error!("Failed to render index page: {e}");
            plain_text(HttpResponse::InternalServerError(), "Error rendering map")
        }
    }
}

async fn index_page(state: &AppState, regions: &[Region]) -> Result<String, RenderError> {
    let mut map = LeafletMap::new(INDEX_CENTER, INDEX_ZOOM);
    let mut linked = Vec::with_capacity(regions.len());

    for region in regions {
        let Some(center) = centroid(region.geometry.as_ref()) else {
            log::debug!("Skipping region {} without a polygon boundary", region.name);
            continue;
        };

        let average = state
            .solar
            .fetch_average(center.latitude, center.longitude, &INDEX_RANGE)
            .await;
        let popup = popup_text(&region.name, average)?;

        for ring in region_polygons(region.geometry.as_ref()) {
            map.add_polygon(&ring, Popup::new(popup.clone()));
        }
        linked.push(region.name.clone());
    }

    render_page(&IndexPage {
        map: map.to_html()?,
        regions: linked,
    })
}

/// `GET /region/{region_name}`
///
/// Shows one region's outline with a marker at its centroid. An unsupported
/// geometry is a server error here, unlike on the index page where the
/// region is skipped.
pub async fn region(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let region_name = path.into_inner();

    let Some(regions) = read_regions(&state).await else {
        return plain_text(HttpResponse::InternalServerError(), "Error loading region data");
    };

    let Some(region) = find_region(&regions, &region_name) else {
        return plain_text(HttpResponse::NotFound(), "Region not found");
    };

    let Some(center) = centroid(region.geometry.as_ref()) else {
        log::error!("Cannot compute centroid for region {region_name}");
        return plain_text(
            HttpResponse::InternalServerError(),
            "Error calculating region centroid",
        );
    };

    let average = state
        .solar
        .fetch_average(center.latitude, center.longitude, &REGION_RANGE)
        .await;

    match region_page(region, center, average) {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => {
            log::error!("Failed to render page for region {region_name}: {e}");
            plain_text(HttpResponse::InternalServerError(), "Error rendering map")
        }
    }
}

fn region_page(
    region: &Region,
    center: Centroid,
    average: SolarAverage,
) -> Result<String, RenderError> {
    let mut map = LeafletMap::new(center.lat_lon(), REGION_ZOOM);
    map.add_geojson(region.to_feature()).add_marker(
        center.lat_lon(),
        Popup::new(popup_text(&region.name, average)?),
    );

    render_page(&RegionPage {
        region_name: region.name.clone(),
        map: map.to_html()?,
    })
}

/// Loads the regions file on the blocking thread pool. Failures are logged
/// and reported as `None`.
async fn read_regions(state: &AppState) -> Option<Vec<Region>> {
    let path = state.regions_path.clone();

    match web::block(move || load_regions(&path)).await {
        Ok(Ok(regions)) => Some(regions),
        Ok(Err(e)) => {
            log::error!(
                "Failed to load region data from {}: {e}",
                state.regions_path.display()
            );
            None
        }
        Err(e) => {
            log::error!("Region loading task failed: {e}");
            None
        }
    }
}

fn plain_text(mut builder: HttpResponseBuilder, message: &'static str) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(message)
}

#[cfg(test)]
mod tests {
    use actix_web::dev::ServerHandle;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpServer, test};

    use super::*;
    use crate::{ServerConfig, configure};

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/regions.geojson");

    /// Nothing listens on port 1, so every solar request fails to connect.
    const CLOSED_SOLAR_URL: &str = "http://127.0.0.1:1/point";

    fn state(regions_path: &str, solar_api_url: &str) -> web::Data<AppState> {
        let config = ServerConfig {
            regions_path: regions_path.into(),
            solar_api_url: solar_api_url.to_string(),
            ..ServerConfig::default()
        };
        web::Data::new(AppState::new(&config, reqwest::Client::new()))
    }

    /// Starts a fake POWER endpoint that always returns the series
    /// `{2.0, 4.0}`.
    fn fake_solar_api() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new().route(
                "/point",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({
                        "properties": {
                            "parameter": {
                                "ALLSKY_SFC_SW_DWN": { "20190101": 2.0, "20190102": 4.0 }
                            }
                        }
                    }))
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (format!("http://{addr}/point"), handle)
    }

    async fn get(state: web::Data<AppState>, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn index_without_region_file_is_server_error() {
        let missing = state("/nonexistent/regions.geojson", CLOSED_SOLAR_URL);
        let (status, body) = get(missing, "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error loading region data");
        assert!(!body.contains("L.map"));
    }

    #[actix_web::test]
    async fn index_draws_polygons_with_averages() {
        let (solar_url, handle) = fake_solar_api();
        let (status, body) = get(state(FIXTURE, &solar_url), "/").await;
        handle.stop(false).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("L.map("));
        // One ring for the Polygon, one per part of the MultiPolygon; the
        // Point region is skipped.
        assert_eq!(body.matches("\"kind\":\"polygon\"").count(), 3);
        assert!(body.contains(
            "Greater Accra\\u003cbr>\\u003cstrong>Avg Solar Radiation:\\u003c/strong> 3.00 MJ/m²"
        ));
        assert!(body.contains("Volta\\u003cbr>"));
        assert!(!body.contains("Survey Point\\u003cbr>"));
        assert!(body.contains("\"fillColor\":\"yellow\""));
    }

    #[actix_web::test]
    async fn index_lists_region_links() {
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/region/Greater%20Accra\""));
        assert!(body.contains("href=\"/region/Volta\""));
        assert!(body.contains("Data unavailable"));
    }

    #[actix_web::test]
    async fn index_omits_links_to_regions_without_boundary() {
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("/region/Survey%20Point"));
        assert!(!body.contains(">Survey Point</a>"));
    }

    #[actix_web::test]
    async fn unknown_region_is_not_found() {
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), "/region/Unknown").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Region not found");
    }

    #[actix_web::test]
    async fn region_without_region_file_is_server_error() {
        let (status, _) = get(
            state("/nonexistent/regions.geojson", CLOSED_SOLAR_URL),
            "/region/Volta",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn region_with_unsupported_geometry_is_server_error() {
        let uri = "/region/Survey%20Point";
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error calculating region centroid");
    }

    #[actix_web::test]
    async fn region_renders_when_solar_api_is_down() {
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), "/region/Volta").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Volta</h1>"));
        assert!(body.contains("Data unavailable"));
        assert!(body.contains("\"kind\":\"geo_json\""));
        assert!(body.contains("\"kind\":\"marker\""));
        assert!(body.contains("\"zoom\":8"));
    }

    #[actix_web::test]
    async fn region_shows_average_from_solar_api() {
        let (solar_url, handle) = fake_solar_api();
        let (status, body) = get(state(FIXTURE, &solar_url), "/region/Greater%20Accra").await;
        handle.stop(false).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("3.00 MJ/m²"));
        assert!(!body.contains("Data unavailable"));
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let (status, body) = get(state(FIXTURE, CLOSED_SOLAR_URL), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: ApiHealth = serde_json::from_str(&body).unwrap();
        assert!(health.healthy);
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
