//! Dashboard filter selection
//!
//! The selection is displayed back to the user but never feeds into data
//! generation.

use serde::{Deserialize, Serialize};

use crate::fixtures::catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default, rename = "rg")]
    pub resource_group: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

fn keep_known<'a, I>(value: Option<String>, mut known: I) -> Option<String>
where
    I: Iterator<Item = &'a str>,
{
    value.filter(|v| known.any(|k| k == v))
}

impl Filters {
    /// Drop any value that is not one of the offered options. Empty
    /// strings count as unselected.
    pub fn normalized(self) -> Self {
        Self {
            subscription: keep_known(
                self.subscription,
                catalog::SUBSCRIPTIONS.iter().map(|(v, _)| *v),
            ),
            resource_group: keep_known(
                self.resource_group,
                catalog::RESOURCE_GROUPS.iter().map(|(v, _)| *v),
            ),
            region: keep_known(self.region, catalog::REGIONS.iter().map(|(v, _)| *v)),
            service: keep_known(self.service, catalog::SERVICES.iter().map(|(v, _)| *v)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subscription.is_none()
            && self.resource_group.is_none()
            && self.region.is_none()
            && self.service.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Filters::default().is_empty());
    }

    #[test]
    fn test_normalized_keeps_known_values() {
        let filters = Filters {
            subscription: Some("prod".to_string()),
            resource_group: Some("rg-data".to_string()),
            region: Some("westeurope".to_string()),
            service: Some("AKS".to_string()),
        }
        .normalized();

        assert_eq!(filters.subscription.as_deref(), Some("prod"));
        assert_eq!(filters.resource_group.as_deref(), Some("rg-data"));
        assert_eq!(filters.region.as_deref(), Some("westeurope"));
        assert_eq!(filters.service.as_deref(), Some("AKS"));
    }

    #[test]
    fn test_normalized_drops_unknown_and_empty() {
        let filters = Filters {
            subscription: Some("staging".to_string()),
            resource_group: Some(String::new()),
            region: None,
            service: Some("Cosmos DB".to_string()),
        }
        .normalized();

        assert!(filters.is_empty());
    }

    #[test]
    fn test_deserialize_query_names() {
        let filters: Filters =
            serde_json::from_str(r#"{"rg":"rg-web","region":"eastus"}"#).unwrap();
        assert_eq!(filters.resource_group.as_deref(), Some("rg-web"));
        assert_eq!(filters.region.as_deref(), Some("eastus"));
        assert!(filters.subscription.is_none());
    }
}
