// handlers/public/openapi.rs - GET /mcp/v1/openapi.json
//
// OpenAPI document generated by utoipa from the handler annotations and the
// serde models, so the served schemas follow the request/response types.

use axum::Json;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::error::ErrorBody;
use crate::handlers::{protected, public};

pub const API_TITLE: &str = "Chuckie MCP Server";

#[derive(OpenApi)]
#[openapi(
    info(title = "Chuckie MCP Server", version = "1.0.0"),
    paths(
        // public
        public::health::health_get,
        // protected
        protected::context::context_get,
        protected::morning_report::morning_report_post,
        protected::reminder::reminder_post,
        protected::quiz::quiz_next_post,
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "agent", description = "Bearer-gated agent helpers"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the shared-secret bearer scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme("bearer_auth", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}

pub async fn openapi_get() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
