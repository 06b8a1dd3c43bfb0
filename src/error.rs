use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Every per-request failure resolves to one of these; nothing in the
/// request path panics. The variant decides the HTTP status, the message
/// becomes the `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    /// A field-level business-rule violation (client-correctable).
    #[error("{0}")]
    Validation(String),

    /// Malformed request: bad body, missing precondition header.
    #[error("{0}")]
    BadRequest(String),

    /// No record stored under the given id.
    #[error("{0}")]
    NotFound(String),

    /// Store-level failure (serialization included). Non-retryable,
    /// non-fatal to the process.
    #[error("{0}")]
    Persistence(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) | Self::Persistence(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            AppError::Validation("name cannot be empty".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound("Fruit not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn persistence_maps_to_400() {
        assert_eq!(
            AppError::Persistence("error saving fruit".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn message_is_the_display_form() {
        let err = AppError::BadRequest("Owner header is required".to_string());
        assert_eq!(err.to_string(), "Owner header is required");
    }
}
