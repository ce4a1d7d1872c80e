//! Fixture generation
//!
//! Produces the sample data behind every dashboard view:
//! - 30 days of actual spend ending today
//! - 14 days of forecast spend starting tomorrow
//! - static service totals, anomalies and recommendations
//!
//! Generation is pure and infallible. Bundles are fixed in shape and
//! randomized in value.

pub mod catalog;
mod generator;
mod types;

pub use generator::{
    actual_spend, forecast_spend, generate_with, round_half_up, FixtureGenerator, ACTUAL_DAYS,
    FORECAST_DAYS,
};
pub use types::{
    Anomaly, DailySpend, FixtureBundle, ForecastPoint, Recommendation, ServiceCost, ServiceTotal,
    SpendPoint,
};
