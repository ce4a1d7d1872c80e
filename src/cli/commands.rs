//! CLI command implementations

use std::path::Path;

use serde::Serialize;

use crate::derived::DerivedMetrics;
use crate::fixtures::FixtureBundle;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::routes::{Route, ROUTE_TABLE};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point. The only function `main` calls.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Fixtures { config } => fixtures(config.as_deref()),
        Command::Routes => routes(),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", &source)]);
    Ok(config)
}

/// Start the HTTP server and block until shutdown.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let server = HttpServer::with_config(config.server.clone(), config.view_context());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let message = format!("HTTP server failed: {}", e);
        log_event_with_fields(Event::ServerFailed, &[("error", &message)]);
        CliError::server_failed(message)
    })
}

#[derive(Debug, Serialize)]
pub struct FixturesOutput {
    pub bundle: FixtureBundle,
    pub metrics: DerivedMetrics,
}

/// Generate one bundle with the configured generator.
pub fn generate_fixtures(config: &Config) -> FixturesOutput {
    let bundle = config.generator().generate();
    let metrics = DerivedMetrics::compute(&bundle);
    FixturesOutput { bundle, metrics }
}

/// Print one bundle and its metrics.
pub fn fixtures(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    write_response(&generate_fixtures(&config))
}

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
    pub title: &'static str,
}

pub fn route_entries() -> Vec<RouteEntry> {
    ROUTE_TABLE
        .iter()
        .map(|(path, route)| RouteEntry {
            path: *path,
            route: *route,
            title: route.title(),
        })
        .collect()
}

/// Print the route table.
pub fn routes() -> CliResult<()> {
    write_response(&route_entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fixtures_with_seed_is_stable() {
        let mut config = Config::default();
        config.dashboard.fixture_seed = Some(11);

        let a = generate_fixtures(&config);
        let b = generate_fixtures(&config);
        assert_eq!(a.bundle.days.len(), 30);
        assert_eq!(a.metrics, DerivedMetrics::compute(&a.bundle));
        assert_eq!(
            a.bundle.days.iter().map(|d| d.spend).collect::<Vec<_>>(),
            b.bundle.days.iter().map(|d| d.spend).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_route_entries() {
        let entries = route_entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].path, "/");
        assert_eq!(entries[0].title, "Dashboard");
        assert_eq!(entries[3].route, Route::Settings);
    }
}
