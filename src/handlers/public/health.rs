// handlers/public/health.rs - GET /mcp/v1/health

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthOut {
    pub status: String,
}

/// Unauthenticated liveness probe. Always `{"status":"OK"}`.
#[utoipa::path(
    get,
    path = "/mcp/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthOut)
    )
)]
pub async fn health_get() -> Json<HealthOut> {
    Json(HealthOut {
        status: "OK".to_string(),
    })
}
