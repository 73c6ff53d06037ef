/// Credential extraction and the auth middleware
pub mod auth;
/// API error types and handling
pub mod errors;
/// HTTP handlers for health and task endpoints
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
