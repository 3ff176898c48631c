//! CLI argument definitions using clap
//!
//! Commands:
//! - userdb init --config <path>
//! - userdb start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// userdb - A minimal user registry HTTP API backed by a flat JSON file
#[derive(Parser, Debug)]
#[command(name = "userdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the config file and an empty user store
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./userdb.json")]
        config: PathBuf,
    },

    /// Start the userdb HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./userdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
