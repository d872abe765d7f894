// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Liveness probes and the machine-readable API description. Nothing here
// reads the API key, so these stay reachable on a misconfigured host.

pub mod health; // GET /mcp/v1/health
pub mod openapi; // GET /mcp/v1/openapi.json

pub use health::health_get;
pub use openapi::openapi_get;
