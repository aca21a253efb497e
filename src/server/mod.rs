//! HTTP front-end: the rated list and a single-movie view.

mod routes;

use std::sync::Arc;

use rocket::{Build, Rocket};

use crate::app::{CinemaError, Result};
use crate::config::ServerConfig;
use crate::service::MovieService;

/// Assemble the application with the default figment.
pub fn build(service: Arc<MovieService>) -> Rocket<Build> {
    mount(rocket::build(), service)
}

/// Serve until shutdown on the configured address.
pub async fn serve(service: Arc<MovieService>, config: &ServerConfig) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.as_str()))
        .merge(("port", config.port));

    tracing::info!("Serving on http://{}:{}", config.address, config.port);

    mount(rocket::custom(figment), service)
        .launch()
        .await
        .map_err(|e| CinemaError::Other(format!("Server error: {}", e)))?;

    Ok(())
}

fn mount(rocket: Rocket<Build>, service: Arc<MovieService>) -> Rocket<Build> {
    rocket.manage(service).mount("/", routes::routes())
}
