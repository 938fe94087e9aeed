use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use wordhue_types::{ColorFormatError, ErrorResponse};

use crate::{color::ColorError, everything::EverythingError};

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Error, Debug)]
pub enum HttpError {
    /// Malformed or missing input, the caller can fix it
    #[error("{0}")]
    BadInput(String),

    /// The requested word list is unknown or has nothing in it
    #[error("{0}")]
    EmptySource(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0:?}")]
    Internal(#[from] anyhow::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadInput(_) => StatusCode::BAD_REQUEST,
            HttpError::EmptySource(_) | HttpError::NotFound => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ColorError> for HttpError {
    fn from(err: ColorError) -> Self {
        HttpError::BadInput(err.to_string())
    }
}

impl From<ColorFormatError> for HttpError {
    fn from(err: ColorFormatError) -> Self {
        HttpError::BadInput(err.to_string())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::BadInput(rejection.body_text())
    }
}

impl From<EverythingError> for HttpError {
    fn from(err: EverythingError) -> Self {
        HttpError::EmptySource(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = match self {
            HttpError::Internal(err) => {
                tracing::error!("{:?}", err);
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!("{}: {}", status, other);
                other.to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
