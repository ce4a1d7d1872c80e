//! # HTTP Server Module
//!
//! Serves the dashboard pages and their JSON views from one axum router.
//!
//! # Endpoints
//!
//! - `/`, `/budgets`, `/reports`, `/settings` - Pages (anything else: 404 page)
//! - `/api/dashboard` - Fixture bundle and derived metrics for one mount
//! - `/api/navigation` - Sidebar state for a path
//! - `/health` - Health check
//! - `/observability/*` - Health and counters

pub mod api_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod page_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{DashboardError, DashboardResult};
pub use server::HttpServer;
pub use state::AppState;
