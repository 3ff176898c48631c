//! HTTP server module for userdb
//!
//! - server: the combined axum server and router
//! - user_routes: handlers for the user collection endpoints
//! - config: host/port/CORS configuration
//! - errors: API error taxonomy and HTTP status mapping

mod config;
mod errors;
mod server;
mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::HttpServer;
pub use user_routes::{user_routes, UserState};
