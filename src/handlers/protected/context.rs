// handlers/protected/context.rs - GET /mcp/v1/context

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ErrorBody;

/// Seed data an agent fetches at the start of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContextOut {
    pub city: String,
    pub topics: Vec<String>,
    pub weekly_goal: String,
}

impl Default for ContextOut {
    fn default() -> Self {
        Self {
            city: "Coronado".to_string(),
            topics: vec!["markets".to_string(), "Padres".to_string(), "AI".to_string()],
            weekly_goal: "Ship agent v1".to_string(),
        }
    }
}

/// Seed data an agent can fetch at the start of a scenario.
#[utoipa::path(
    get,
    path = "/mcp/v1/context",
    tag = "agent",
    responses(
        (status = 200, description = "Default context", body = ContextOut),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorBody),
        (status = 403, description = "Token does not match the configured key", body = ErrorBody),
        (status = 503, description = "Server has no API key configured", body = ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
pub async fn context_get() -> Json<ContextOut> {
    Json(ContextOut::default())
}
