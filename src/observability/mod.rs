//! Observability for the dashboard service
//!
//! - Structured JSON-lines logging
//! - Typed lifecycle events
//! - Process counters
//! - Begin/complete scopes
//!
//! Observability is read-only and never fails the caller.
//!
//! ```ignore
//! use finops_dashboard::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ViewMounted, &[("route", "/")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else if event.is_verbose() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_for_event() {
        assert_eq!(severity_for(Event::ViewMounted), Severity::Info);
        assert_eq!(severity_for(Event::RouteNotFound), Severity::Warn);
        assert_eq!(severity_for(Event::ServerFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::HeadScriptAttached), Severity::Trace);
    }

    #[test]
    fn test_log_event() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "8080")]);
    }
}
