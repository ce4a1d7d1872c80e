//! CLI module
//!
//! - serve: run the HTTP dashboard
//! - fixtures: print one generated bundle with its metrics
//! - routes: print the route table

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{fixtures, generate_fixtures, route_entries, routes, run, run_command, serve};
pub use config::{Config, DashboardConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
