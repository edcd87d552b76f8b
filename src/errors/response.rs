use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::errors::AppError;

// The IntoResponse implementation converts AppError into a well-formed HTTP
// response with a JSON error body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            // Authentication failures are deliberately undifferentiated
            AppError::AuthenticationFailed => StatusCode::UNAUTHORIZED,

            // Missing records
            AppError::UserNotFound | AppError::CategoryNotFound | AppError::TaskNotFound => {
                StatusCode::NOT_FOUND
            }

            // Validation failures, both at creation and after an edit
            AppError::InvalidUser | AppError::TaskInvalid | AppError::TaskUpdateRejected => {
                StatusCode::NOT_ACCEPTABLE
            }

            // Uniqueness violations
            AppError::DuplicateUsername => StatusCode::CONFLICT,

            // Infrastructure failures are internal server errors
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Session(ref e) => {
                tracing::error!("Session error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Hash(ref e) => {
                tracing::error!("Password hashing error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An unexpected error occurred.".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
