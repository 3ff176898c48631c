//! CLI command implementations
//!
//! - init: write a default config when missing, create the users file
//! - start: load config, open the store, serve HTTP until shutdown

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::UserStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Top-level configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the users file (default: "./users.json")
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_users_file() -> String {
    "./users.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.users_file.is_empty() {
            return Err(CliError::Config("users_file must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Parse arguments and dispatch (entry point for main)
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Initialize the config file and an empty user store.
///
/// Writes a default config when the config file is missing, then creates
/// the users file with an empty collection. Fails when the users file
/// already exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        fs::write(config_path, serde_json::to_string_pretty(&config)?)?;
        config
    };

    let users_path = Path::new(&config.users_file);
    if users_path.exists() {
        return Err(CliError::AlreadyInitialized);
    }

    if let Some(parent) = users_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(users_path, "[]")?;

    Logger::info("STORE_INITIALIZED", &[("path", &config.users_file)]);
    Ok(())
}

/// Load config, open the store, and serve HTTP until shutdown.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = UserStore::open(Path::new(&config.users_file))
        .map_err(|e| CliError::Boot(e.to_string()))?;
    Logger::info(
        "STORE_OPENED",
        &[("path", &store.path().display().to_string())],
    );

    let server = HttpServer::with_config(store, config.http);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Boot(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Boot(e.to_string()))
}
