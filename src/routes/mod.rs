//! Navigation shell
//!
//! Route table, sidebar entries and in-page insight shortcuts. The only
//! state is the current path, which belongs to the caller.

use serde::Serialize;

use crate::fixtures::catalog;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Budgets,
    Reports,
    Settings,
    NotFound,
}

/// Paths with a page of their own. Everything else is `NotFound`.
pub const ROUTE_TABLE: [(&str, Route); 4] = [
    ("/", Route::Dashboard),
    ("/budgets", Route::Budgets),
    ("/reports", Route::Reports),
    ("/settings", Route::Settings),
];

/// Drop one trailing slash, except on the root path.
pub fn normalize_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}

fn same_path(route_path: &str, path: &str) -> bool {
    route_path.eq_ignore_ascii_case(normalize_path(path))
}

impl Route {
    /// Resolve a request path. One trailing slash and ASCII case are ignored.
    pub fn resolve(path: &str) -> Self {
        ROUTE_TABLE
            .iter()
            .find(|(p, _)| same_path(p, path))
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path, if the route has one
    pub fn path(&self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| route == self)
            .map(|(p, _)| *p)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Budgets => "Budgets",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::NotFound => "Not Found",
        }
    }
}

/// One entry of the "Navigation" sidebar group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// One entry of the "Insights Today" sidebar group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightLink {
    /// In-page anchor, e.g. `#anomalies`
    pub href: &'static str,
    pub label: String,
    pub icon: &'static str,
}

pub const ANOMALIES_ANCHOR: &str = "anomalies";
pub const RECOMMENDATIONS_ANCHOR: &str = "recommendations";

const NAV_ICONS: [(Route, &str); 4] = [
    (Route::Dashboard, "line-chart"),
    (Route::Budgets, "wallet"),
    (Route::Reports, "bar-chart"),
    (Route::Settings, "settings"),
];

/// Navigation entries for `current`. An entry is active when its url
/// matches the current path the same way `Route::resolve` does.
pub fn nav_items(current: &str) -> Vec<NavItem> {
    NAV_ICONS
        .iter()
        .filter_map(|(route, icon)| {
            route.path().map(|url| NavItem {
                title: route.title(),
                url,
                icon: *icon,
                active: same_path(url, current),
            })
        })
        .collect()
}

/// Sidebar shortcuts into the dashboard page.
pub fn insight_links() -> Vec<InsightLink> {
    vec![
        InsightLink {
            href: "#anomalies",
            label: format!("Anomalies: {} spikes detected", catalog::ANOMALIES.len()),
            icon: "alert-triangle",
        },
        InsightLink {
            href: "#recommendations",
            label: format!("Recommendations: {} actions", catalog::RECOMMENDATIONS.len()),
            icon: "lightbulb",
        },
    ]
}

/// Full sidebar state for one path
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub current: String,
    pub route: Route,
    pub nav: Vec<NavItem>,
    pub insights: Vec<InsightLink>,
}

impl Navigation {
    pub fn for_path(current: &str) -> Self {
        Self {
            current: current.to_string(),
            route: Route::resolve(current),
            nav: nav_items(current),
            insights: insight_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(Route::resolve("/budgets"), Route::Budgets);
        assert_eq!(Route::resolve("/reports"), Route::Reports);
        assert_eq!(Route::resolve("/settings"), Route::Settings);
    }

    #[test]
    fn test_resolve_falls_back_to_not_found() {
        assert_eq!(Route::resolve("/nope"), Route::NotFound);
        assert_eq!(Route::resolve("/budgets/2026"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
    }

    #[test]
    fn test_resolve_ignores_trailing_slash_and_case() {
        assert_eq!(Route::resolve("/budgets/"), Route::Budgets);
        assert_eq!(Route::resolve("/Budgets"), Route::Budgets);
        assert_eq!(Route::resolve("/SETTINGS/"), Route::Settings);
        assert_eq!(Route::resolve("/budgets//"), Route::NotFound);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/reports/"), "/reports");
        assert_eq!(normalize_path("/reports"), "/reports");
    }

    #[test]
    fn test_path_round_trip() {
        for (path, route) in ROUTE_TABLE {
            assert_eq!(route.path(), Some(path));
        }
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_exactly_one_active_entry() {
        let items = nav_items("/reports");
        assert_eq!(items.len(), 4);
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Reports");
    }

    #[test]
    fn test_active_entry_for_unnormalized_path() {
        for path in ["/budgets/", "/Budgets"] {
            let active: Vec<_> = nav_items(path).into_iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1, "{}", path);
            assert_eq!(active[0].url, "/budgets");
        }
    }

    #[test]
    fn test_no_active_entry_for_unknown_path() {
        assert!(nav_items("/missing").iter().all(|i| !i.active));
    }

    #[test]
    fn test_insight_labels() {
        let links = insight_links();
        assert_eq!(links[0].href, "#anomalies");
        assert_eq!(links[0].label, "Anomalies: 2 spikes detected");
        assert_eq!(links[1].label, "Recommendations: 3 actions");
    }
}
