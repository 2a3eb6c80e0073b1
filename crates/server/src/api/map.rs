use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

pub async fn config(State(state): State<Arc<AppState>>) -> Response {
    Json(state.map.clone()).into_response()
}
