//! # HTTP Server
//!
//! Main HTTP server wiring the user routes, fallback, and CORS layer.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::HttpServerConfig;
use super::user_routes::{not_found_fallback, user_routes, UserState};
use crate::observability::Logger;
use crate::store::UserStore;

/// HTTP server for the user registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: UserStore) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: UserStore, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(store: UserStore, config: &HttpServerConfig) -> Router {
        let state = Arc::new(UserState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use axum::http::HeaderValue;
            use tower_http::cors::AllowOrigin;

            let mut origins: Vec<HeaderValue> = Vec::new();
            for origin in &config.cors_origins {
                match origin.parse() {
                    Ok(value) => origins.push(value),
                    // A typo in cors_origins must not disappear silently
                    Err(_) => Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", origin.as_str())]),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(user_routes(state))
            // Any unmatched route/method yields 404 {"message": "Not Found"}
            .fallback(not_found_fallback)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
