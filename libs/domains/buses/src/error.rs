use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Message returned to clients when no bus carries the requested id
pub const NOT_FOUND_MESSAGE: &str = "Bus with specified id not found!";

#[derive(Debug, Error)]
pub enum BusError {
    #[error("Bus not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type BusResult<T> = Result<T, BusError>;

impl From<BusError> for AppError {
    fn from(err: BusError) -> Self {
        match err {
            BusError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            BusError::Validation(msg) => AppError::Validation(msg),
            BusError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BusError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BusError {
    fn from(err: mongodb::error::Error) -> Self {
        BusError::Database(err.to_string())
    }
}
