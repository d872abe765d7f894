// handlers/protected/quiz.rs - POST /mcp/v1/quiz/next
//
// Stub with a single question until there is a real question bank.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ErrorBody;
use crate::middleware::ValidJson;

const QUESTION_ID: &str = "q_0001";
const QUESTION: &str = "Which organelle is the powerhouse of the cell?";
const CHOICES: [&str; 4] = ["Ribosome", "Mitochondrion", "Golgi apparatus", "Lysosome"];
const CORRECT_INDEX: usize = 1;

pub const DEFAULT_CHOICES: i64 = 4;
pub const MIN_CHOICES: i64 = 2;

// The floor must keep the correct answer inside the truncated pool.
const _: () = assert!(CORRECT_INDEX < MIN_CHOICES as usize);

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizNextIn {
    /// e.g. "biology", "algebra". Accepted, not used yet.
    #[serde(default)]
    pub topic: Option<String>,
    /// "easy" | "medium" | "hard". Accepted, not used yet.
    #[serde(default = "default_difficulty")]
    #[schema(default = "easy")]
    pub difficulty: Option<String>,
    /// Choices to return. Unset or 0 means 4; anything else is floored at 2.
    #[serde(default)]
    #[schema(default = 4)]
    pub num_choices: Option<i64>,
}

fn default_difficulty() -> Option<String> {
    Some("easy".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizNextOut {
    pub id: String,
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// Number of choices to return: 4 when unspecified or 0, never fewer than 2.
pub fn effective_choice_count(requested: Option<i64>) -> usize {
    let n = match requested {
        None | Some(0) => DEFAULT_CHOICES,
        Some(n) => n.max(MIN_CHOICES),
    };
    usize::try_from(n).unwrap_or(usize::MAX)
}

pub fn next_question(requested: Option<i64>) -> QuizNextOut {
    let n = effective_choice_count(requested);
    QuizNextOut {
        id: QUESTION_ID.to_string(),
        question: QUESTION.to_string(),
        choices: CHOICES.iter().take(n).map(|c| c.to_string()).collect(),
        correct_index: CORRECT_INDEX,
    }
}

/// Returns the next quiz question.
#[utoipa::path(
    post,
    path = "/mcp/v1/quiz/next",
    tag = "agent",
    request_body = QuizNextIn,
    responses(
        (status = 200, description = "Quiz question", body = QuizNextOut),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorBody),
        (status = 403, description = "Token does not match the configured key", body = ErrorBody),
        (status = 413, description = "Request body exceeds the size limit", body = ErrorBody),
        (status = 422, description = "Request body failed validation", body = ErrorBody),
        (status = 503, description = "Server has no API key configured", body = ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
pub async fn quiz_next_post(ValidJson(body): ValidJson<QuizNextIn>) -> Json<QuizNextOut> {
    tracing::debug!(
        topic = ?body.topic,
        difficulty = ?body.difficulty,
        num_choices = ?body.num_choices,
        "Serving quiz question"
    );

    Json(next_question(body.num_choices))
}
