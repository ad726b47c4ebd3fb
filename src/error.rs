use crate::structs::api_response::error_response;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Incorrect date format")]
    InvalidDateFormat,

    #[error("Invalid date")]
    InvalidDate,

    #[error("Invalid duration: expected an integer number of minutes")]
    InvalidDuration,

    #[error("No user found with id '{0}'")]
    UserNotFound(String),

    // Client-facing message stays generic; the driver detail is logged.
    #[error("Database error")]
    Persistence(#[from] mongodb::error::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDateFormat
            | AppError::InvalidDate
            | AppError::InvalidDuration => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Persistence(err) = self {
            tracing::error!("store operation failed: {:?}", err);
        }
        HttpResponse::build(self.status_code()).json(error_response(&self.to_string()))
    }
}
