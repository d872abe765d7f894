// handlers/protected/morning_report.rs - POST /mcp/v1/morning-report

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ErrorBody;
use crate::middleware::ValidJson;

pub const CLOSING_LINE: &str = "Have a ripper day.";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MorningReportIn {
    pub city: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stocks: Option<Vec<String>>,
    #[serde(default)]
    pub weekly_goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MorningReportOut {
    pub lines: Vec<String>,
}

/// Short, speakable lines in a fixed order: greeting, topics, tickers, goal, closer.
/// Empty lists and an empty goal are skipped.
pub fn build_lines(report: &MorningReportIn) -> Vec<String> {
    let mut lines = vec![format!("Good morning from {}.", report.city)];

    if !report.topics.is_empty() {
        lines.push(format!("Today's brief: {}.", report.topics.join(", ")));
    }
    if let Some(stocks) = report.stocks.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Watching tickers: {}.", stocks.join(", ")));
    }
    if let Some(goal) = report.weekly_goal.as_deref().filter(|g| !g.is_empty()) {
        lines.push(format!("This week's goal: {}.", goal));
    }

    lines.push(CLOSING_LINE.to_string());
    lines
}

/// Returns short, speakable lines an agent can read out.
#[utoipa::path(
    post,
    path = "/mcp/v1/morning-report",
    tag = "agent",
    request_body = MorningReportIn,
    responses(
        (status = 200, description = "Report lines", body = MorningReportOut),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorBody),
        (status = 403, description = "Token does not match the configured key", body = ErrorBody),
        (status = 413, description = "Request body exceeds the size limit", body = ErrorBody),
        (status = 422, description = "Request body failed validation", body = ErrorBody),
        (status = 503, description = "Server has no API key configured", body = ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
pub async fn morning_report_post(ValidJson(body): ValidJson<MorningReportIn>) -> Json<MorningReportOut> {
    tracing::debug!(
        topics = body.topics.len(),
        stocks = body.stocks.as_ref().map_or(0, Vec::len),
        "Building morning report"
    );

    Json(MorningReportOut {
        lines: build_lines(&body),
    })
}
