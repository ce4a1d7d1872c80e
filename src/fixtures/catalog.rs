//! Static sample catalog
//!
//! Hand-picked values shown on every dashboard view. Anomalies are
//! stored as day offsets and resolved against the generated series.

use super::types::{Anomaly, DailySpend, Recommendation, ServiceTotal};

/// Service totals, largest first.
pub const SERVICES: [(&str, u64); 5] = [
    ("Virtual Machines", 4200),
    ("Azure SQL", 3100),
    ("Storage", 2100),
    ("AKS", 1700),
    ("App Services", 1200),
];

/// A flagged spike, anchored to a day offset within the actuals window.
#[derive(Debug, Clone, Copy)]
pub struct AnomalySeed {
    pub id: u32,
    pub day_index: usize,
    pub service: &'static str,
    pub delta: u32,
}

pub const ANOMALIES: [AnomalySeed; 2] = [
    AnomalySeed {
        id: 1,
        day_index: 26,
        service: "Azure SQL",
        delta: 38,
    },
    AnomalySeed {
        id: 2,
        day_index: 28,
        service: "Storage",
        delta: 26,
    },
];

/// (id, title, monthly impact, category)
pub const RECOMMENDATIONS: [(&str, &str, u64, &str); 3] = [
    ("r1", "Right-size 3 VMs (D8s_v5 → D4s_v5)", 620, "Compute"),
    ("r2", "Purchase 1-year Reserved Instances (SQL)", 840, "Database"),
    ("r3", "Move cold blobs to Cool tier", 210, "Storage"),
];

/// Filter options as (value, label). Not wired to any data.
pub const SUBSCRIPTIONS: [(&str, &str); 2] = [("prod", "Contoso-Prod"), ("dev", "Contoso-Dev")];
pub const RESOURCE_GROUPS: [(&str, &str); 2] = [("rg-web", "rg-web"), ("rg-data", "rg-data")];
pub const REGIONS: [(&str, &str); 2] = [("eastus", "East US"), ("westeurope", "West Europe")];

pub fn services() -> Vec<ServiceTotal> {
    SERVICES
        .iter()
        .map(|(name, value)| ServiceTotal {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

pub fn recommendations() -> Vec<Recommendation> {
    RECOMMENDATIONS
        .iter()
        .map(|(id, title, impact, category)| Recommendation {
            id: id.to_string(),
            title: title.to_string(),
            impact: *impact,
            category: category.to_string(),
        })
        .collect()
}

/// Resolve anomaly seeds against a generated actuals window.
///
/// Seeds whose offset falls outside `days` are skipped; with the fixed
/// 30-day window every seed resolves.
pub fn anomalies(days: &[DailySpend]) -> Vec<Anomaly> {
    ANOMALIES
        .iter()
        .filter_map(|seed| {
            days.get(seed.day_index).map(|day| Anomaly {
                id: seed.id,
                date: day.date.clone(),
                service: seed.service.to_string(),
                delta: seed.delta,
            })
        })
        .collect()
}
