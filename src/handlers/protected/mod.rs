// handlers/protected/mod.rs - Protected handlers (bearer API key required)
//
// Security Level: shared-secret bearer token (see crate::auth)
// Route Prefix: /mcp/v1/*
// Middleware: api_key_middleware, applied as a route layer in crate::app
//
// Every handler is stateless: validate the body, shape a response. The pure
// part of each lives in a plain function next to the async handler.

pub mod context; // GET /mcp/v1/context
pub mod morning_report; // POST /mcp/v1/morning-report
pub mod quiz; // POST /mcp/v1/quiz/next
pub mod reminder; // POST /mcp/v1/reminder

pub use context::context_get;
pub use morning_report::morning_report_post;
pub use quiz::quiz_next_post;
pub use reminder::reminder_post;
