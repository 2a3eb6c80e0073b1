use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};
use waymark::prelude::*;

use crate::{
    dto::{CoordinateDto, LocateFailedDto, SelectionDto},
    state::AppState,
};

pub async fn selection(State(state): State<Arc<AppState>>) -> Response {
    let controller = state.controller.lock().await;
    Json(SelectionDto::from(&*controller)).into_response()
}

pub async fn click(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CoordinateDto>,
) -> Result<Response, StatusCode> {
    let coordinate = coordinate_from(body)?;
    let mut controller = state.controller.lock().await;
    controller.click(coordinate);
    Ok(Json(SelectionDto::from(&*controller)).into_response())
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.reset();
    Json(SelectionDto::from(&*controller)).into_response()
}

pub async fn end_session(State(state): State<Arc<AppState>>) -> StatusCode {
    state.controller.lock().await.reset();
    info!("Session ended, selection cleared");
    StatusCode::NO_CONTENT
}

pub async fn locate_start(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut controller = state.controller.lock().await;
    if !controller.begin_locating() {
        return Err(StatusCode::CONFLICT);
    }
    Ok(Json(SelectionDto::from(&*controller)).into_response())
}

pub async fn locate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CoordinateDto>,
) -> Result<Response, StatusCode> {
    let coordinate = coordinate_from(body)?;
    let mut controller = state.controller.lock().await;
    controller.finish_locating(Ok(coordinate));
    Ok(Json(SelectionDto::from(&*controller)).into_response())
}

pub async fn locate_failed(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LocateFailedDto>,
) -> Response {
    let err = LocateError::from_code(body.code);
    warn!("Geolocation failed: {err}");
    let mut controller = state.controller.lock().await;
    controller.finish_locating(Err(err));
    Json(SelectionDto::from(&*controller)).into_response()
}

fn coordinate_from(body: CoordinateDto) -> Result<Coordinate, StatusCode> {
    Coordinate::new(body.latitude, body.longitude).map_err(|err| {
        warn!("Rejected coordinate: {err}");
        StatusCode::BAD_REQUEST
    })
}
