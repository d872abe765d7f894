pub mod auth;
pub mod json;

pub use auth::api_key_middleware;
pub use json::ValidJson;
