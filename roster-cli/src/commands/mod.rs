//! CLI command implementations

pub mod config;
pub mod generate;
pub mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roster_core::config::Config;
use roster_core::RosterContext;

/// Where the data comes from; shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// API base URL (default: http://127.0.0.1:8000)
    #[arg(long)]
    pub base_url: Option<String>,
    /// Full users endpoint, overriding base URL + path
    #[arg(long)]
    pub users_url: Option<String>,
    /// Full items endpoint, overriding base URL + path
    #[arg(long)]
    pub items_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Use the built-in demo dataset instead of the API
    #[arg(long)]
    pub demo: bool,
}

impl SourceArgs {
    /// Apply command line overrides on top of a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(url) = &self.users_url {
            config.users_url = Some(url.clone());
        }
        if let Some(url) = &self.items_url {
            config.items_url = Some(url.clone());
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        config
    }
}

/// Get the roster directory from environment or default
pub fn get_roster_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROSTER_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .map(|home| home.join(".roster"))
            .unwrap_or_else(|| PathBuf::from(".roster"))
    }
}

/// Load settings and apply the command line overrides
///
/// Flags win over `ROSTER_API_URL`, which wins over settings.json.
pub fn load_config(source: &SourceArgs) -> Result<Config> {
    let roster_dir = get_roster_dir();
    let config = Config::load(&roster_dir)
        .with_context(|| format!("Failed to load settings from {}", roster_dir.display()))?;
    Ok(source.apply(config))
}

/// Build the roster context for a command
pub fn get_context(source: &SourceArgs) -> Result<RosterContext> {
    let config = load_config(source)?;
    RosterContext::from_config(config, source.demo).context("Failed to initialize roster context")
}
