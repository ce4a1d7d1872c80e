//! Shared server state

use std::sync::Arc;

use crate::observability::MetricsRegistry;
use crate::view::ViewContext;

/// State shared by every route: the context each mount is created from.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub context: ViewContext,
}

impl AppState {
    pub fn new(context: ViewContext) -> Self {
        Self { context }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.context.metrics
    }
}
