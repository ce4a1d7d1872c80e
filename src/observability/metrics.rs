//! Process counters
//!
//! Monotonic, reset only on process start. Relaxed ordering; exactness
//! across threads is not required.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    views_mounted: AtomicU64,
    views_unmounted: AtomicU64,
    fixtures_generated: AtomicU64,
    pages_rendered: AtomicU64,
    routes_not_found: AtomicU64,
    api_requests: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_views_mounted(&self) {
        self.views_mounted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_views_unmounted(&self) {
        self.views_unmounted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fixtures_generated(&self) {
        self.fixtures_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_pages_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_routes_not_found(&self) {
        self.routes_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_api_requests(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fixtures_generated(&self) -> u64 {
        self.fixtures_generated.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            views_mounted: self.views_mounted.load(Ordering::Relaxed),
            views_unmounted: self.views_unmounted.load(Ordering::Relaxed),
            fixtures_generated: self.fixtures_generated.load(Ordering::Relaxed),
            pages_rendered: self.pages_rendered.load(Ordering::Relaxed),
            routes_not_found: self.routes_not_found.load(Ordering::Relaxed),
            api_requests: self.api_requests.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub views_mounted: u64,
    pub views_unmounted: u64,
    pub fixtures_generated: u64,
    pub pages_rendered: u64,
    pub routes_not_found: u64,
    pub api_requests: u64,
}
