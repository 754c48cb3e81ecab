use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// HTML routes wrap it in [`crate::render::PageError`] instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status, machine-readable code and user-facing message for this error.
    /// Server-side failures are logged here so every surface logs them the same way.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELD",
                format!("The '{field}' field is required"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(name) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("'{name}' is not a supported résumé format (expected .pdf or .docx)"),
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IO_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_bad_request() {
        let (status, code, message) = AppError::MissingField("jd").parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "MISSING_FIELD");
        assert!(message.contains("jd"));
    }

    #[test]
    fn test_unsupported_format_is_415() {
        let (status, code, _) = AppError::UnsupportedFormat("cv.txt".to_string()).parts();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(code, "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_extraction_is_unprocessable() {
        let (status, _, message) = AppError::Extraction("bad xref".to_string()).parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message, "bad xref");
    }

    #[test]
    fn test_io_error_hides_details() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into();
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "IO_ERROR");
        assert!(!message.contains("disk on fire"));
    }

    #[test]
    fn test_json_response_carries_status() {
        let response = AppError::MissingField("resume").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
