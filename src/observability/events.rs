//! Observable dashboard events

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Process lifecycle
    BootStart,
    ConfigLoaded,
    Serving,
    ShutdownComplete,
    ServerFailed,

    // View lifecycle
    ViewMounted,
    ViewUnmounted,
    FixturesGenerated,
    HeadScriptAttached,
    HeadScriptReleased,
    FiltersChanged,

    // Routing
    RouteNotFound,

    // API
    ApiRequest,
    ApiError,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "FINOPS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "FINOPS_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",

            Event::ViewMounted => "VIEW_MOUNTED",
            Event::ViewUnmounted => "VIEW_UNMOUNTED",
            Event::FixturesGenerated => "FIXTURES_GENERATED",
            Event::HeadScriptAttached => "HEAD_SCRIPT_ATTACHED",
            Event::HeadScriptReleased => "HEAD_SCRIPT_RELEASED",
            Event::FiltersChanged => "FILTERS_CHANGED",

            Event::RouteNotFound => "ROUTE_NOT_FOUND",

            Event::ApiRequest => "API_REQUEST",
            Event::ApiError => "API_ERROR",
        }
    }

    /// Fatal events end the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }

    /// Per-element head bookkeeping, logged at TRACE.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Event::HeadScriptAttached | Event::HeadScriptReleased)
    }

    /// Events worth a WARN line rather than INFO.
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::RouteNotFound | Event::ApiError)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
