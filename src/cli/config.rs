//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "dashboard": { "title": "Azure FinOps AI Dashboard", "fixture_seed": null }
//! }
//! ```
//!
//! Every field is optional. No file at all means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::fixtures::FixtureGenerator;
use crate::http_server::HttpServerConfig;
use crate::view::{ViewContext, DEFAULT_TITLE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Product title shown in the header and page titles
    #[serde(default = "default_title")]
    pub title: String,

    /// Pins the random term of generated spend. Unset means every mount
    /// draws fresh values.
    #[serde(default)]
    pub fixture_seed: Option<u64>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            fixture_seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.dashboard.title.trim().is_empty() {
            return Err(CliError::config_error("dashboard.title must not be empty"));
        }

        Ok(())
    }

    pub fn generator(&self) -> FixtureGenerator {
        FixtureGenerator::with_seed(self.dashboard.fixture_seed)
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.dashboard.title.clone(), self.generator())
    }
}
