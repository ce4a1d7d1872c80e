//! Fixture data types
//!
//! Display rows only. Nothing here is mutated after generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of spend, either observed or forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendPoint {
    /// Calendar day the point belongs to
    pub day: NaiveDate,
    /// Chart label, `MM-DD`
    pub date: String,
    /// Spend in whole currency units
    pub spend: u64,
}

impl SpendPoint {
    /// Build a point, deriving the `MM-DD` label from the day.
    pub fn new(day: NaiveDate, spend: u64) -> Self {
        Self {
            day,
            date: day.format("%m-%d").to_string(),
            spend,
        }
    }
}

/// Observed daily spend (30 entries ending today).
pub type DailySpend = SpendPoint;

/// Forecast daily spend (14 entries after today).
pub type ForecastPoint = SpendPoint;

/// Catalog form of a service total, as fed to the filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTotal {
    pub name: String,
    pub value: u64,
}

/// Chart form of a service total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service: String,
    pub cost: u64,
}

impl From<&ServiceTotal> for ServiceCost {
    fn from(total: &ServiceTotal) -> Self {
        Self {
            service: total.name.clone(),
            cost: total.value,
        }
    }
}

/// A flagged day/service pair with an above-normal spend delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: u32,
    /// Label of the `DailySpend` entry this anomaly points at
    pub date: String,
    pub service: String,
    /// Percentage increase over normal
    pub delta: u32,
}

/// A suggested cost-saving action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    /// Estimated monthly saving
    pub impact: u64,
    pub category: String,
}

/// Everything one page view needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureBundle {
    pub days: Vec<DailySpend>,
    pub forecast: Vec<ForecastPoint>,
    pub services: Vec<ServiceTotal>,
    pub by_service: Vec<ServiceCost>,
    pub anomalies: Vec<Anomaly>,
    pub recs: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_point_label() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let point = SpendPoint::new(day, 900);
        assert_eq!(point.date, "03-07");
        assert_eq!(point.spend, 900);
    }

    #[test]
    fn test_service_cost_from_total() {
        let total = ServiceTotal {
            name: "AKS".to_string(),
            value: 1700,
        };
        let cost = ServiceCost::from(&total);
        assert_eq!(cost.service, "AKS");
        assert_eq!(cost.cost, 1700);
    }

    #[test]
    fn test_spend_point_serializes_iso_day() {
        let day = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let json = serde_json::to_value(SpendPoint::new(day, 1)).unwrap();
        assert_eq!(json["day"], "2026-12-31");
        assert_eq!(json["date"], "12-31");
    }
}
