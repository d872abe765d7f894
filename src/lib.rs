pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::ApiKeyGate;
use crate::config::AppConfig;
use crate::error::ApiError;

/// Router with the gate reading the secret from the configured env var.
pub fn app(config: &AppConfig) -> Router {
    app_with_gate(config, ApiKeyGate::from_env(config.security.api_key_env.clone()))
}

pub fn app_with_gate(config: &AppConfig, gate: ApiKeyGate) -> Router {
    let mut router = Router::new()
        // Public
        .merge(public_routes())
        // Protected (bearer API key)
        .merge(protected_routes(gate))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    // Global middleware
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if config.api.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

fn public_routes() -> Router {
    use handlers::public;

    Router::new()
        .route("/mcp/v1/health", get(public::health_get))
        .route("/mcp/v1/openapi.json", get(public::openapi_get))
}

fn protected_routes(gate: ApiKeyGate) -> Router {
    use handlers::protected;

    Router::new()
        .route("/mcp/v1/context", get(protected::context_get))
        .route("/mcp/v1/morning-report", post(protected::morning_report_post))
        .route("/mcp/v1/reminder", post(protected::reminder_post))
        .route("/mcp/v1/quiz/next", post(protected::quiz_next_post))
        // route_layer so unknown paths still 404 instead of asking for a token
        .route_layer(from_fn_with_state(gate, middleware::api_key_middleware))
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
