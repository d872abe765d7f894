// HTTP API Error Types
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::AuthError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 422 Unprocessable Entity (body missing, not JSON, or the wrong shape)
    UnprocessableEntity(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::UnprocessableEntity(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::UnprocessableEntity(_) => "VALIDATION_ERROR",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Response body for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: true,
            code: self.error_code().to_string(),
            message: self.message().to_string(),
            detail: self.message().to_string(),
        }
    }
}

/// JSON body of every error response.
/// `detail` carries the same text as `message` for clients that only read
/// `detail`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: bool,
    #[schema(example = "FORBIDDEN")]
    pub code: String,
    pub message: String,
    pub detail: String,
}

// Static constructor methods
impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        ApiError::UnprocessableEntity(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::ServiceMisconfigured { .. } => ApiError::service_unavailable(err.to_string()),
            AuthError::Unauthenticated => ApiError::unauthorized(err.to_string()),
            AuthError::Forbidden => ApiError::forbidden(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Every client-side body problem is a validation failure
            JsonRejection::JsonDataError(e) => ApiError::unprocessable_entity(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::unprocessable_entity(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::unprocessable_entity(e.body_text()),
            // Over DefaultBodyLimit
            JsonRejection::BytesRejection(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ApiError::payload_too_large(e.body_text())
            }
            other => {
                tracing::error!("Failed to read request body: {}", other.body_text());
                ApiError::internal_server_error("Failed to read request body")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_gate_statuses() {
        let misconfigured: ApiError = AuthError::ServiceMisconfigured { var: "API_KEY".into() }.into();
        assert_eq!(misconfigured.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(misconfigured.message(), "Server misconfigured: API_KEY not set");

        let missing: ApiError = AuthError::Unauthenticated.into();
        assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(missing.message(), "Missing Bearer token");

        let invalid: ApiError = AuthError::Forbidden.into();
        assert_eq!(invalid.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(invalid.message(), "Invalid API key");
    }

    #[test]
    fn json_body_carries_code_and_detail() {
        let body = ApiError::not_found("No route for /nope").body();
        assert!(body.error);
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.message, "No route for /nope");
        assert_eq!(body.detail, "No route for /nope");
    }

    #[test]
    fn oversized_body_is_a_client_error() {
        let err = ApiError::payload_too_large("length limit exceeded");
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.body().code, "PAYLOAD_TOO_LARGE");
    }
}
