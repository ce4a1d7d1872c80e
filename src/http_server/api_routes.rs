//! API Routes
//!
//! JSON views of the same data the pages render.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{DashboardError, DashboardResult};
use super::state::AppState;
use crate::derived::DerivedMetrics;
use crate::fixtures::FixtureBundle;
use crate::observability::{log_event_with_fields, Event};
use crate::routes::Navigation;
use crate::view::{DashboardView, Filters};

pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/navigation", get(navigation_handler))
        .fallback(api_not_found)
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub mount_id: Uuid,
    pub filters: Filters,
    pub bundle: FixtureBundle,
    pub metrics: DerivedMetrics,
}

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub path: Option<String>,
}

/// Build the dashboard payload from one mount.
pub fn dashboard_payload(state: &AppState, filters: Filters) -> DashboardResponse {
    let mut view = DashboardView::mount(&state.context, "/");
    view.set_filters(filters);

    DashboardResponse {
        mount_id: view.mount_id(),
        filters: view.filters().clone(),
        bundle: view.bundle().clone(),
        metrics: view.metrics(),
    }
}

/// Sidebar state for a path. Paths must be absolute.
pub fn navigation_payload(path: Option<String>) -> DashboardResult<Navigation> {
    let path = path.unwrap_or_else(|| "/".to_string());
    if !path.starts_with('/') {
        return Err(DashboardError::InvalidPath(path));
    }
    Ok(Navigation::for_path(&path))
}

async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    filters: Option<Query<Filters>>,
) -> Json<DashboardResponse> {
    state.metrics().increment_api_requests();
    log_event_with_fields(Event::ApiRequest, &[("endpoint", "dashboard")]);
    let filters = filters.map(|Query(f)| f).unwrap_or_default();
    Json(dashboard_payload(&state, filters))
}

async fn navigation_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> DashboardResult<Json<Navigation>> {
    state.metrics().increment_api_requests();
    log_event_with_fields(Event::ApiRequest, &[("endpoint", "navigation")]);
    navigation_payload(query.path).map(Json)
}

async fn api_not_found(uri: Uri) -> DashboardError {
    DashboardError::NotFound(uri.path().to_string())
}
