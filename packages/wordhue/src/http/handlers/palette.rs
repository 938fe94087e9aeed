use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use wordhue_types::{Color, ColorFormat, ColorPaletteResponse};

use crate::{
    color::{format_color, generate_palette, parse_color, random_endpoint},
    http::{
        error::{HttpError, HttpResult},
        state::HttpState,
    },
    random::RandomSource,
};

use super::non_empty;

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// Start color as `#rrggbb` or `rgba(r,g,b,a)`, random when absent
    pub from: Option<String>,
    /// End color as `#rrggbb` or `rgba(r,g,b,a)`, random when absent
    pub to: Option<String>,
    /// Number of colors, defaults to the configured palette size
    pub points: Option<String>,
    /// Output format, defaults to rgba
    pub format: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/color-palette",
    params(PaletteQuery),
    responses(
        (status = 200, description = "Evenly spaced colors from `from` to `to`", body = ColorPaletteResponse),
        (status = 400, description = "Malformed color, points or format", body = wordhue_types::ErrorResponse),
    ),
    description = "Linear palette between two colors"
)]
#[axum::debug_handler]
pub async fn handle_color_palette(
    State(state): State<HttpState>,
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> impl IntoResponse {
    match color_palette_inner(&state, query) {
        Ok(resp) => {
            state.metrics.increment_palettes_served(resp.palette.len());
            Json(resp).into_response()
        }
        Err(e) => {
            state.metrics.increment_total_errors("color-palette");
            e.into_response()
        }
    }
}

fn color_palette_inner(
    state: &HttpState,
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> HttpResult<ColorPaletteResponse> {
    let Query(query) = query?;
    let rng = state.rng.as_ref();

    let format = match non_empty(query.format) {
        Some(format) => format.parse::<ColorFormat>()?,
        None => ColorFormat::Rgba,
    };

    let points = match non_empty(query.points) {
        Some(points) => parse_points(&points, state.config.max_palette_points)?,
        None => state.config.default_palette_points,
    };

    let from = endpoint(query.from, format, rng)?;
    let to = endpoint(query.to, format, rng)?;

    let palette = generate_palette(from, to, points)?;

    Ok(ColorPaletteResponse {
        palette: palette
            .iter()
            .map(|color| format_color(color, format))
            .collect(),
        format,
    })
}

fn endpoint(text: Option<String>, format: ColorFormat, rng: &dyn RandomSource) -> HttpResult<Color> {
    match non_empty(text) {
        Some(text) => Ok(parse_color(&text)?),
        None => Ok(random_endpoint(format, rng)),
    }
}

fn parse_points(points: &str, max: usize) -> HttpResult<usize> {
    let parsed = points.trim().parse::<usize>().map_err(|_| {
        HttpError::BadInput(format!(
            "Invalid points '{points}', expected a whole number between 1 and {max}"
        ))
    })?;

    if parsed == 0 || parsed > max {
        return Err(HttpError::BadInput(format!(
            "Invalid points '{points}', expected a whole number between 1 and {max}"
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::parse_points;

    #[test]
    fn points_bounds() {
        assert_eq!(parse_points("3", 10).unwrap(), 3);
        assert_eq!(parse_points(" 10 ", 10).unwrap(), 10);
        assert!(parse_points("0", 10).is_err());
        assert!(parse_points("11", 10).is_err());
        assert!(parse_points("-1", 10).is_err());
        assert!(parse_points("three", 10).is_err());
    }
}
