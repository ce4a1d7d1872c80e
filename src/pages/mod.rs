//! Server-rendered pages
//!
//! Every page renders from a mounted view. Only the dashboard touches the
//! fixture bundle; the other pages are static text inside the shell.

mod charts;
mod dashboard;
mod layout;
mod static_pages;

pub use charts::{area_chart, bar_chart, line_chart, nice_ceiling, pie_chart, PALETTE};

use maud::Markup;

use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::routes::Route;
use crate::view::DashboardView;

/// Render the full HTML document for a mounted view.
pub fn render_page(view: &DashboardView) -> Markup {
    let route = view.route();
    let scope = ObservationScope::with_fields("PAGE_RENDER", &[("path", view.path())]);

    let body = match route {
        Route::Dashboard => dashboard::render(view),
        Route::Budgets => static_pages::budgets(),
        Route::Reports => static_pages::reports(),
        Route::Settings => static_pages::settings(),
        Route::NotFound => {
            view.registry().increment_routes_not_found();
            log_event_with_fields(Event::RouteNotFound, &[("path", view.path())]);
            static_pages::not_found(view.path())
        }
    };

    let html = layout::shell(view, body);
    view.registry().increment_pages_rendered();
    let bytes = html.0.len().to_string();
    scope.complete_with_fields(&[("bytes", &bytes)]);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewContext;

    #[test]
    fn test_render_counts_pages() {
        let ctx = ViewContext::default();
        let view = DashboardView::mount(&ctx, "/settings");
        let html = render_page(&view).into_string();
        assert!(html.contains("<h1 class=\"page-title\">Settings</h1>"));
        assert_eq!(ctx.metrics.snapshot().pages_rendered, 1);
        assert_eq!(ctx.metrics.fixtures_generated(), 0);
    }

    #[test]
    fn test_not_found_counted() {
        let ctx = ViewContext::default();
        let view = DashboardView::mount(&ctx, "/missing");
        let html = render_page(&view).into_string();
        assert!(html.contains("404"));
        assert_eq!(ctx.metrics.snapshot().routes_not_found, 1);
    }
}
