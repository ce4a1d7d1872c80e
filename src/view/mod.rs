//! Mounted page views
//!
//! A `DashboardView` is one mount of a page. It owns:
//! - the fixture bundle, generated at most once per mount
//! - the filter selection
//! - the document head, plus the structured-data script while the
//!   dashboard page is mounted
//!
//! Dropping the view unmounts it and releases the head script.

mod document;
mod filters;

use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::derived::DerivedMetrics;
use crate::fixtures::{FixtureBundle, FixtureGenerator};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::routes::Route;

pub use document::{structured_data, Document, HeadElement, ScriptGuard, LD_JSON};
pub use filters::Filters;

pub const DEFAULT_TITLE: &str = "Azure FinOps AI Dashboard";

/// What every mount shares: the generator, counters and product title.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub title: String,
    pub generator: FixtureGenerator,
    pub metrics: Arc<MetricsRegistry>,
}

impl ViewContext {
    pub fn new(title: impl Into<String>, generator: FixtureGenerator) -> Self {
        Self {
            title: title.into(),
            generator,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, FixtureGenerator::new())
    }
}

#[derive(Debug)]
pub struct DashboardView {
    mount_id: Uuid,
    route: Route,
    path: String,
    context: ViewContext,
    bundle: OnceLock<FixtureBundle>,
    filters: Filters,
    document: Arc<Document>,
    head_script: Option<ScriptGuard>,
}

impl DashboardView {
    /// Mount the page for `path`.
    pub fn mount(context: &ViewContext, path: &str) -> Self {
        let route = Route::resolve(path);
        let mount_id = Uuid::new_v4();
        let document = Document::new(page_title(&context.title, route));

        let head_script = (route == Route::Dashboard).then(|| {
            document.attach_script(LD_JSON, structured_data(&context.title).to_string())
        });

        context.metrics.increment_views_mounted();
        let id = mount_id.to_string();
        log_event_with_fields(Event::ViewMounted, &[("mount_id", &id), ("path", path)]);

        Self {
            mount_id,
            route,
            path: path.to_string(),
            context: context.clone(),
            bundle: OnceLock::new(),
            filters: Filters::default(),
            document,
            head_script,
        }
    }

    pub fn mount_id(&self) -> Uuid {
        self.mount_id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.context.title
    }

    pub fn registry(&self) -> &MetricsRegistry {
        &self.context.metrics
    }

    pub fn document(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    /// The mount's bundle, generated on first access.
    pub fn bundle(&self) -> &FixtureBundle {
        self.bundle.get_or_init(|| {
            let bundle = self.context.generator.generate();
            self.context.metrics.increment_fixtures_generated();
            let id = self.mount_id.to_string();
            let days = bundle.days.len().to_string();
            log_event_with_fields(
                Event::FixturesGenerated,
                &[("days", &days), ("mount_id", &id)],
            );
            bundle
        })
    }

    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(self.bundle())
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Replace the filter selection. The bundle is left untouched.
    pub fn set_filters(&mut self, filters: Filters) {
        let filters = filters.normalized();
        if filters != self.filters {
            let id = self.mount_id.to_string();
            log_event_with_fields(Event::FiltersChanged, &[("mount_id", &id)]);
            self.filters = filters;
        }
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        // Release before reporting the unmount
        self.head_script.take();
        self.context.metrics.increment_views_unmounted();
        let id = self.mount_id.to_string();
        log_event_with_fields(Event::ViewUnmounted, &[("mount_id", &id)]);
    }
}

fn page_title(product: &str, route: Route) -> String {
    match route {
        Route::Dashboard => product.to_string(),
        other => format!("{} | {}", other.title(), product),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ViewContext {
        ViewContext::new(DEFAULT_TITLE, FixtureGenerator::new())
    }

    #[test]
    fn test_bundle_generated_once_per_mount() {
        let ctx = context();
        let view = DashboardView::mount(&ctx, "/");
        assert_eq!(ctx.metrics.fixtures_generated(), 0);

        let first = view.bundle() as *const FixtureBundle;
        let second = view.bundle() as *const FixtureBundle;
        assert_eq!(first, second);
        assert_eq!(ctx.metrics.fixtures_generated(), 1);
    }

    #[test]
    fn test_filter_change_keeps_bundle() {
        let ctx = context();
        let mut view = DashboardView::mount(&ctx, "/");
        let before = view.bundle().clone();

        view.set_filters(Filters {
            region: Some("eastus".to_string()),
            ..Filters::default()
        });

        assert_eq!(view.filters().region.as_deref(), Some("eastus"));
        assert_eq!(view.bundle(), &before);
        assert_eq!(ctx.metrics.fixtures_generated(), 1);
    }

    #[test]
    fn test_dashboard_mount_holds_script_until_unmount() {
        let ctx = context();
        let view = DashboardView::mount(&ctx, "/");
        let document = view.document();
        assert_eq!(document.script_count(LD_JSON), 1);

        drop(view);
        assert_eq!(document.script_count(LD_JSON), 0);
    }

    #[test]
    fn test_other_pages_attach_nothing() {
        let ctx = context();
        let view = DashboardView::mount(&ctx, "/budgets");
        assert_eq!(view.route(), Route::Budgets);
        assert_eq!(view.document().script_count(LD_JSON), 0);
    }

    #[test]
    fn test_mount_and_unmount_counted() {
        let ctx = context();
        {
            let _a = DashboardView::mount(&ctx, "/");
            let _b = DashboardView::mount(&ctx, "/reports");
        }
        let snapshot = ctx.metrics.snapshot();
        assert_eq!(snapshot.views_mounted, 2);
        assert_eq!(snapshot.views_unmounted, 2);
    }

    #[test]
    fn test_each_mount_has_its_own_id() {
        let ctx = context();
        let a = DashboardView::mount(&ctx, "/");
        let b = DashboardView::mount(&ctx, "/");
        assert_ne!(a.mount_id(), b.mount_id());
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title("FinOps", Route::Dashboard), "FinOps");
        assert_eq!(page_title("FinOps", Route::Settings), "Settings | FinOps");
    }
}
