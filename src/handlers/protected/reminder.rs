// handlers/protected/reminder.rs - POST /mcp/v1/reminder
//
// Stub: accepts the reminder and hands back a synthetic id. Nothing is
// stored or scheduled; wiring to a data store or calendar comes later.

use axum::Json;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

use crate::error::ErrorBody;
use crate::middleware::ValidJson;

const ID_PREFIX: &str = "rem_";
const ID_SPACE: u64 = 10_000_000;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReminderIn {
    pub text: String,
    /// ISO-8601 timestamp, passed through unvalidated.
    #[serde(default)]
    pub when_iso: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReminderOut {
    pub id: String,
    #[schema(example = "scheduled")]
    pub status: String,
}

/// `rem_<n>` with `n` taken from SHA-256 of the text, reduced below 10^7.
/// Deterministic across runs and builds; collisions are possible.
pub fn reminder_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    format!("{}{}", ID_PREFIX, u64::from_be_bytes(head) % ID_SPACE)
}

/// Accepts a reminder and returns a synthetic id. Nothing is scheduled yet.
#[utoipa::path(
    post,
    path = "/mcp/v1/reminder",
    tag = "agent",
    request_body = ReminderIn,
    responses(
        (status = 200, description = "Reminder accepted", body = ReminderOut),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorBody),
        (status = 403, description = "Token does not match the configured key", body = ErrorBody),
        (status = 413, description = "Request body exceeds the size limit", body = ErrorBody),
        (status = 422, description = "Request body failed validation", body = ErrorBody),
        (status = 503, description = "Server has no API key configured", body = ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
pub async fn reminder_post(ValidJson(body): ValidJson<ReminderIn>) -> Json<ReminderOut> {
    let id = reminder_id(&body.text);
    tracing::debug!(id = %id, when_iso = ?body.when_iso, "Accepted reminder (not scheduled)");

    Json(ReminderOut {
        id,
        status: "scheduled".to_string(),
    })
}
