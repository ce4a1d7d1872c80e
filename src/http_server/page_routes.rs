//! Page Routes
//!
//! HTML pages. Every request mounts a fresh view, renders it and drops it
//! before the response leaves the handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Router,
};

use maud::Markup;

use super::state::AppState;
use crate::pages::render_page;
use crate::routes::{Route, ROUTE_TABLE};
use crate::view::{DashboardView, Filters};

/// Page routes; any unmatched path renders the 404 page.
pub fn page_routes(state: Arc<AppState>) -> Router {
    let mut router = Router::new();
    for (path, _) in ROUTE_TABLE {
        router = router.route(path, get(page_handler));
    }
    router.fallback(page_handler).with_state(state)
}

/// Mount, render and unmount one page.
pub fn render_path(state: &AppState, path: &str, filters: Filters) -> (StatusCode, Markup) {
    let mut view = DashboardView::mount(&state.context, path);
    view.set_filters(filters);

    let status = if view.route() == Route::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, render_page(&view))
}

async fn page_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    filters: Option<Query<Filters>>,
) -> (StatusCode, Markup) {
    let filters = filters.map(|Query(f)| f).unwrap_or_default();
    render_path(&state, uri.path(), filters)
}
