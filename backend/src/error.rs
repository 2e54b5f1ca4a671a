//! Unified error handling for the backend API.
//!
//! Handlers return [`ApiResult`] and use `?` freely; every variant maps to an
//! HTTP status and a JSON [`ErrorResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use shared::schedule::ScheduleError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    /// The document store failed to read or write
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),

    /// Request failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Picker values could not be turned into a schedule
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            Self::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("store_error", "Record store operation failed"),
                )
            }
            Self::Validation(e) => {
                tracing::warn!("Rejected request: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details(
                        "validation_error",
                        "Request is missing required fields",
                        e.to_string(),
                    ),
                )
            }
            Self::Schedule(e) => {
                tracing::warn!("Rejected schedule: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("schedule_error", e.to_string()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_status_codes() {
        let store = AppError::from(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let schedule = AppError::from(ScheduleError::EndBeforeStart {
            start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        })
        .into_response();
        assert_eq!(schedule.status(), StatusCode::BAD_REQUEST);

        let validation = AppError::from(ValidationErrors::new()).into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
    }
}
