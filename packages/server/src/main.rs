#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ghana solar radiation map server binary.
//!
//! Configuration comes from `BIND_ADDR`, `PORT`, `REGIONS_PATH` and
//! `SOLAR_API_URL`; log verbosity from `RUST_LOG`.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    ghana_solar_map_server::run_server().await
}
