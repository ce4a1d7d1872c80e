//! Derived metrics
//!
//! Aggregates shown on the KPI cards. Pure functions of a bundle.

use serde::Serialize;

use crate::fixtures::{round_half_up, FixtureBundle, SpendPoint};

/// Forecast window summarised on the forecast card.
pub const FORECAST_WINDOW: usize = 7;

/// Sum of spend over a series.
pub fn total_spend(points: &[SpendPoint]) -> u64 {
    points.iter().map(|p| p.spend).sum()
}

/// Rounded mean daily spend. An empty series averages to zero.
pub fn average_daily(points: &[SpendPoint]) -> u64 {
    if points.is_empty() {
        return 0;
    }
    round_half_up(total_spend(points) as f64 / points.len() as f64) as u64
}

/// Sum of the first `window` points, or the whole series if shorter.
pub fn windowed_total(points: &[SpendPoint], window: usize) -> u64 {
    total_spend(&points[..window.min(points.len())])
}

/// Format a spend as thousands with one decimal, e.g. `$27.4k`.
/// Ties round up.
pub fn format_thousands(amount: u64) -> String {
    let tenths = (amount + 50) / 100;
    format!("${}.{}k", tenths / 10, tenths % 10)
}

/// KPI values for one bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub total30: u64,
    pub avg_daily: u64,
    pub forecast_next7: u64,
    pub anomaly_count: usize,
    pub recommendation_count: usize,
}

impl DerivedMetrics {
    pub fn compute(bundle: &FixtureBundle) -> Self {
        Self {
            total30: total_spend(&bundle.days),
            avg_daily: average_daily(&bundle.days),
            forecast_next7: windowed_total(&bundle.forecast, FORECAST_WINDOW),
            anomaly_count: bundle.anomalies.len(),
            recommendation_count: bundle.recs.len(),
        }
    }

    /// 30-day total as shown on the spend card.
    pub fn total30_display(&self) -> String {
        format_thousands(self.total30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn series(spends: &[u64]) -> Vec<SpendPoint> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        spends
            .iter()
            .enumerate()
            .map(|(i, s)| SpendPoint::new(start + Days::new(i as u64), *s))
            .collect()
    }

    #[test]
    fn test_total_spend() {
        assert_eq!(total_spend(&series(&[800, 900, 1000])), 2700);
        assert_eq!(total_spend(&[]), 0);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 2001 / 2 = 1000.5
        assert_eq!(average_daily(&series(&[1000, 1001])), 1001);
        assert_eq!(average_daily(&series(&[1000, 1000, 1001])), 1000);
        assert_eq!(average_daily(&[]), 0);
    }

    #[test]
    fn test_windowed_total() {
        let points = series(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(windowed_total(&points, 7), 28);
        assert_eq!(windowed_total(&points, 20), 45);
        assert_eq!(windowed_total(&points, 0), 0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(27_400), "$27.4k");
        assert_eq!(format_thousands(940), "$0.9k");
        assert_eq!(format_thousands(0), "$0.0k");
        assert_eq!(format_thousands(999_960), "$1000.0k");
    }

    #[test]
    fn test_format_thousands_rounds_ties_up() {
        assert_eq!(format_thousands(27_250), "$27.3k");
        assert_eq!(format_thousands(31_250), "$31.3k");
        assert_eq!(format_thousands(27_249), "$27.2k");
        assert_eq!(format_thousands(950), "$1.0k");
    }
}
