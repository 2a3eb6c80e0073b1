mod api;
mod config;
mod dto;
mod osrm;
mod state;

use crate::{
    config::{RouterKind, ServerConfig},
    osrm::OsrmRouter,
    state::{AppState, RouteBackend},
};
use axum::routing::{get, post};
use std::sync::Arc;
use tracing::{error, info};
use waymark::routing::StraightLineRouter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let (results_tx, results_rx) = crossbeam_channel::unbounded();
    let backend = match config.router {
        RouterKind::Osrm => {
            info!("Routing through OSRM at {}", config.osrm_url);
            RouteBackend::Osrm(OsrmRouter::new(&config.osrm_url, results_tx))
        }
        RouterKind::StraightLine => {
            info!("Routing with straight-line estimates at {} km/h", config.speed_kmh);
            RouteBackend::StraightLine(
                StraightLineRouter::new(results_tx).with_speed(config.speed_kmh),
            )
        }
    };
    let state = Arc::new(AppState::new(config.map.clone(), backend));
    state::spawn_result_pump(&state, results_rx);

    let app = axum::Router::new()
        .route("/config", get(api::config))
        .route("/selection", get(api::selection))
        .route("/click", post(api::click))
        .route("/reset", post(api::reset))
        .route("/locate/start", post(api::locate_start))
        .route("/locate", post(api::locate))
        .route("/locate/failed", post(api::locate_failed))
        .route("/session/end", post(api::end_session))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
