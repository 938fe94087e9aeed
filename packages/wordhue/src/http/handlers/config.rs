use axum::{extract::State, response::IntoResponse, Json};

use crate::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "The running server's resolved configuration"),
    ),
    description = "Current configuration"
)]
#[axum::debug_handler]
pub async fn handle_config(State(state): State<HttpState>) -> impl IntoResponse {
    Json(state.config.clone())
}
