use axum::response::{IntoResponse, Redirect};

use crate::http::error::HttpError;

pub async fn handle_not_found() -> impl IntoResponse {
    HttpError::NotFound
}

pub async fn handle_root() -> impl IntoResponse {
    Redirect::temporary("/swagger-ui")
}
