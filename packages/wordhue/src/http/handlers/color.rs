use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use wordhue_types::{ColorFormat, RandomColorResponse};

use crate::{
    color::{random_color, random_format},
    http::{error::HttpResult, state::HttpState},
};

use super::non_empty;

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorQuery {
    /// hex, rgba or oklch, a random one when absent
    pub format: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/color",
    params(ColorQuery),
    responses(
        (status = 200, description = "A random color", body = RandomColorResponse),
        (status = 400, description = "Unknown format", body = wordhue_types::ErrorResponse),
    ),
    description = "Random color in the requested format"
)]
#[axum::debug_handler]
pub async fn handle_random_color(
    State(state): State<HttpState>,
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> impl IntoResponse {
    match random_color_inner(&state, query) {
        Ok(resp) => {
            state.metrics.increment_colors_served(resp.format.as_str());
            Json(resp).into_response()
        }
        Err(e) => {
            state.metrics.increment_total_errors("color");
            e.into_response()
        }
    }
}

fn random_color_inner(
    state: &HttpState,
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> HttpResult<RandomColorResponse> {
    let Query(query) = query?;
    let rng = state.rng.as_ref();

    let format = match non_empty(query.format) {
        Some(format) => format.parse::<ColorFormat>()?,
        None => random_format(rng),
    };

    Ok(RandomColorResponse {
        color: random_color(format, rng),
        format,
    })
}
