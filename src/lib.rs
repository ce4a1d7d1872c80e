//! finops-dashboard - Azure FinOps cost-analytics dashboard shell
//!
//! Server-rendered dashboard pages over in-memory fixture data: a 30-day
//! spend series, a 14-day forecast, static service totals, anomalies and
//! savings recommendations. Nothing is persisted and nothing calls Azure.

pub mod cli;
pub mod derived;
pub mod fixtures;
pub mod http_server;
pub mod observability;
pub mod pages;
pub mod routes;
pub mod view;
