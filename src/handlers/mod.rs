// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer API key)
pub mod public; // No authentication: health probe and API description
pub mod protected; // Bearer gate: agent-facing endpoints under /mcp/v1/*
