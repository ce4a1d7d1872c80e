//! # HTTP Server
//!
//! Combines the page, API and observability routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::page_routes::page_routes;
use super::state::AppState;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::view::ViewContext;

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration and an unseeded generator
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), ViewContext::default())
    }

    pub fn with_config(config: HttpServerConfig, context: ViewContext) -> Self {
        let router = Self::build_router(&config, AppState::new(context));
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", s.as_str())]);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Build the combined router
    pub fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
        let state = Arc::new(state);

        Router::new()
            .merge(health_routes())
            .nest("/observability", observability_routes(state.clone()))
            .nest("/api", api_routes(state.clone()))
            // Pages last: they own the fallback
            .merge(page_routes(state))
            .layer(Self::cors_layer(config))
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    /// Serve until the listener fails or Ctrl-C arrives.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", &bound)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event_with_fields(Event::ShutdownComplete, &[("addr", &bound)]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed
        std::future::pending::<()>().await;
    }
}
