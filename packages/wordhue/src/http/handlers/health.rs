use axum::{extract::State, response::IntoResponse, Json};
use tracing::instrument;
use wordhue_types::HealthResponse;

use crate::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health status", body = HealthResponse),
    ),
    description = "Liveness and the number of loaded word lists"
)]
#[instrument(level = "debug", skip(state))]
#[axum::debug_handler]
pub async fn handle_health(State(state): State<HttpState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        word_lists: state.words.keys().len(),
    })
}
