//! CLI argument definitions using clap
//!
//! Commands:
//! - finops-dashboard serve [--config <path>] [--port <port>]
//! - finops-dashboard fixtures [--config <path>]
//! - finops-dashboard routes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Azure FinOps dashboard over in-memory fixture data
#[derive(Parser, Debug)]
#[command(name = "finops-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print one generated fixture bundle and its metrics as JSON
    Fixtures {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the route table as JSON
    Routes,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["finops-dashboard", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_fixtures_with_config() {
        let cli =
            Cli::try_parse_from(["finops-dashboard", "fixtures", "--config", "finops.json"])
                .unwrap();
        match cli.command {
            Command::Fixtures { config } => {
                assert_eq!(config, Some(PathBuf::from("finops.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["finops-dashboard", "serve", "--port", "99999"]).is_err());
    }
}
