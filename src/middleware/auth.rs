use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::auth::{ApiKeyGate, AuthError};
use crate::error::ApiError;

/// Bearer gate for protected routes. Runs the check on every request; there
/// is no session or cached verdict.
pub async fn api_key_middleware(
    State(gate): State<ApiKeyGate>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Raw bytes: a non-ASCII token is a mismatch, not a missing header.
    let authorization = headers.get(AUTHORIZATION).map(HeaderValue::as_bytes);

    if let Err(err) = gate.check(authorization) {
        // Never log the header value or the expected secret
        match &err {
            AuthError::ServiceMisconfigured { var } => {
                tracing::error!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "Rejecting protected request: {} is not set",
                    var
                );
            }
            AuthError::Unauthenticated | AuthError::Forbidden => {
                tracing::warn!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    reason = %err,
                    "Rejecting protected request"
                );
            }
        }
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
