use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use wordhue_types::{PartOfSpeech, WordCategory, WordEntry};

use crate::{
    http::{
        error::{HttpError, HttpResult},
        state::HttpState,
    },
    words::{random_word_by_category, random_word_by_part_of_speech},
};

#[utoipa::path(
    get,
    path = "/api/{category}",
    params(
        ("category" = String, Path, description = "One of: animals, birds, fish, fruits, vegetables, objects, noun, verb")
    ),
    responses(
        (status = 200, description = "A random word from the category", body = WordEntry),
        (status = 404, description = "Unknown category or nothing in it", body = wordhue_types::ErrorResponse),
    ),
    description = "Random word from a category"
)]
#[axum::debug_handler]
pub async fn handle_word_by_category(
    State(state): State<HttpState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    match word_by_category_inner(&state, &category).await {
        Ok(resp) => {
            state.metrics.increment_words_served(&category);
            Json(resp).into_response()
        }
        Err(e) => {
            state.metrics.increment_total_errors("category");
            e.into_response()
        }
    }
}

// the part of speech lists are reachable here too, under their own names
async fn word_by_category_inner(state: &HttpState, key: &str) -> HttpResult<WordEntry> {
    let (words, rng) = (state.words.as_ref(), state.rng.as_ref());

    let entry = if let Ok(category) = key.parse::<WordCategory>() {
        random_word_by_category(words, category, rng).await
    } else if let Ok(pos) = key.parse::<PartOfSpeech>() {
        random_word_by_part_of_speech(words, pos, rng).await
    } else {
        return Err(HttpError::EmptySource("Category not found".to_string()));
    };

    entry.ok_or_else(|| HttpError::EmptySource(format!("No {key} found")))
}

#[utoipa::path(
    get,
    path = "/api/random-noun",
    responses(
        (status = 200, description = "A random noun", body = WordEntry),
        (status = 404, description = "No nouns available", body = wordhue_types::ErrorResponse),
    ),
    description = "Random noun"
)]
#[axum::debug_handler]
pub async fn handle_random_noun(State(state): State<HttpState>) -> impl IntoResponse {
    part_of_speech_response(&state, PartOfSpeech::Noun).await
}

#[utoipa::path(
    get,
    path = "/api/random-verb",
    responses(
        (status = 200, description = "A random verb", body = WordEntry),
        (status = 404, description = "No verbs available", body = wordhue_types::ErrorResponse),
    ),
    description = "Random verb"
)]
#[axum::debug_handler]
pub async fn handle_random_verb(State(state): State<HttpState>) -> impl IntoResponse {
    part_of_speech_response(&state, PartOfSpeech::Verb).await
}

async fn part_of_speech_response(state: &HttpState, pos: PartOfSpeech) -> axum::response::Response {
    match part_of_speech_inner(state, pos).await {
        Ok(resp) => {
            state.metrics.increment_words_served(pos.as_str());
            Json(resp).into_response()
        }
        Err(e) => {
            state.metrics.increment_total_errors(match pos {
                PartOfSpeech::Noun => "random-noun",
                PartOfSpeech::Verb => "random-verb",
            });
            e.into_response()
        }
    }
}

async fn part_of_speech_inner(state: &HttpState, pos: PartOfSpeech) -> HttpResult<WordEntry> {
    random_word_by_part_of_speech(state.words.as_ref(), pos, state.rng.as_ref())
        .await
        .ok_or_else(|| HttpError::EmptySource(format!("No {pos}s found")))
}
