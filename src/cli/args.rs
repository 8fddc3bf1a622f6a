//! CLI argument definitions using clap
//!
//! Commands:
//! - fruitstand init --config <path>
//! - fruitstand serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fruitstand - A minimal in-memory REST service for users and fruits
#[derive(Parser, Debug)]
#[command(name = "fruitstand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./fruitstand.json")]
        config: PathBuf,
    },

    /// Start the fruitstand server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./fruitstand.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["fruitstand", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./fruitstand.json"));
                assert!(port.is_none());
            }
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["fruitstand", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, Some(8080)),
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["fruitstand"]).is_err());
    }
}
