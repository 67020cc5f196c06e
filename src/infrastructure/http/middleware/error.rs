use crate::domain::errors::{DomainError, EnrollmentError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    Internal(String),
    Conflict(String),
    ServiceUnavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Convert from domain errors
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::Conflict(msg) => ApiError::Conflict(msg),
            DomainError::Unauthorized(msg) => {
                tracing::debug!("Unauthorized: {}", msg);
                ApiError::Unauthorized
            }
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

// Business-rule failures carry a user-facing message
impl From<EnrollmentError> for ApiError {
    fn from(err: EnrollmentError) -> Self {
        let message = err.to_string();
        match err {
            EnrollmentError::AlreadyEnrolled { .. } => ApiError::Conflict(message),
            EnrollmentError::CourseNotFound(_) => ApiError::NotFound(message),
            EnrollmentError::NotEnrolled { .. } => ApiError::Forbidden(message),
            EnrollmentError::ModuleNotFound { .. } => ApiError::NotFound(message),
            EnrollmentError::StorageUnavailable => ApiError::ServiceUnavailable(message),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_errors_map_to_statuses() {
        let cases = [
            (
                EnrollmentError::AlreadyEnrolled {
                    course_id: "1".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                EnrollmentError::CourseNotFound("9".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                EnrollmentError::NotEnrolled {
                    course_id: "1".to_string(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                EnrollmentError::StorageUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_unauthorized_domain_error_hides_detail() {
        let err = ApiError::from(DomainError::Unauthorized("Invalid email or password".into()));
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
