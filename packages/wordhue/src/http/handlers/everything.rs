use axum::{extract::State, response::IntoResponse, Json};
use tracing::instrument;
use wordhue_types::RandomEverythingResponse;

use crate::{
    everything::random_everything,
    http::{error::HttpResult, state::HttpState},
};

#[utoipa::path(
    get,
    path = "/api/random",
    responses(
        (status = 200, description = "Six words, a color and a palette", body = RandomEverythingResponse),
        (status = 404, description = "A word list is empty", body = wordhue_types::ErrorResponse),
    ),
    description = "One random pick from every word list, with a color and a palette"
)]
#[instrument(level = "debug", skip(state))]
#[axum::debug_handler]
pub async fn handle_random_everything(State(state): State<HttpState>) -> impl IntoResponse {
    match random_everything_inner(&state).await {
        Ok(resp) => {
            state.metrics.increment_words_served("random");
            state
                .metrics
                .increment_colors_served(resp.color.format.as_str());
            state
                .metrics
                .increment_palettes_served(resp.palette.palette.len());
            Json(resp).into_response()
        }
        Err(e) => {
            state.metrics.increment_total_errors("random");
            e.into_response()
        }
    }
}

async fn random_everything_inner(state: &HttpState) -> HttpResult<RandomEverythingResponse> {
    Ok(random_everything(state.words.as_ref(), state.rng.as_ref()).await?)
}
