use super::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        words::handle_word_by_category,
        words::handle_random_noun,
        words::handle_random_verb,
        color::handle_random_color,
        palette::handle_color_palette,
        everything::handle_random_everything,
        hello::handle_hello,
        health::handle_health,
        config::handle_config,
    ),
    components(schemas(
        wordhue_types::WordEntry,
        wordhue_types::ColorFormat,
        wordhue_types::ColorString,
        wordhue_types::ErrorResponse,
    )),
    info(
        title = "Wordhue API",
        description = "Random words, colors and palettes"
    )
)]
pub struct ApiDoc;
