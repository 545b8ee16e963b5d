//! Configuration management
//!
//! Settings live in an optional `settings.json` inside the roster directory:
//! ```json
//! {
//!   "apiBaseUrl": "http://127.0.0.1:8000",
//!   "usersPath": "/api/users/",
//!   "itemsPath": "/api/items/",
//!   "outputPath": "report.xml",
//!   "timeoutSecs": 30,
//!   "indent": true
//! }
//! ```
//! Every key is optional. `ROSTER_API_URL` overrides the base URL.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::result::{Error, Result};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "ROSTER_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_USERS_PATH: &str = "/api/users/";
pub const DEFAULT_ITEMS_PATH: &str = "/api/items/";
pub const DEFAULT_OUTPUT_PATH: &str = "report.xml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default)]
    users_path: Option<String>,
    #[serde(default)]
    items_path: Option<String>,
    #[serde(default)]
    users_url: Option<String>,
    #[serde(default)]
    items_url: Option<String>,
    #[serde(default)]
    output_path: Option<PathBuf>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    indent: Option<bool>,
}

/// Effective roster configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api_base_url: String,
    pub users_path: String,
    pub items_path: String,
    /// Full users endpoint, bypassing base URL + path
    pub users_url: Option<String>,
    /// Full items endpoint, bypassing base URL + path
    pub items_url: Option<String>,
    pub output_path: PathBuf,
    pub timeout_secs: u64,
    /// Pretty-print the XML report
    pub indent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            users_path: DEFAULT_USERS_PATH.to_string(),
            items_path: DEFAULT_ITEMS_PATH.to_string(),
            users_url: None,
            items_url: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            indent: true,
        }
    }
}

impl Config {
    /// Load config from the roster directory, then apply `ROSTER_API_URL`
    pub fn load(roster_dir: &Path) -> Result<Self> {
        Self::load_with_env(roster_dir, std::env::var(API_URL_ENV).ok())
    }

    /// Load config with an explicit base URL override in place of the env var
    pub fn load_with_env(roster_dir: &Path, api_url_override: Option<String>) -> Result<Self> {
        let settings_path = roster_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::config(format!("Invalid settings file {}: {}", settings_path.display(), e))
            })?
        } else {
            SettingsFile::default()
        };

        let defaults = Self::default();
        let config = Self {
            api_base_url: api_url_override
                .filter(|url| !url.trim().is_empty())
                .or(raw.api_base_url)
                .unwrap_or(defaults.api_base_url),
            users_path: raw.users_path.unwrap_or(defaults.users_path),
            items_path: raw.items_path.unwrap_or(defaults.items_path),
            users_url: raw.users_url,
            items_url: raw.items_url,
            output_path: raw.output_path.unwrap_or(defaults.output_path),
            timeout_secs: raw.timeout_secs.unwrap_or(defaults.timeout_secs),
            indent: raw.indent.unwrap_or(defaults.indent),
        };

        tracing::debug!(path = %settings_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Resolved users endpoint
    pub fn users_endpoint(&self) -> Result<Url> {
        self.endpoint(self.users_url.as_deref(), &self.users_path)
    }

    /// Resolved items endpoint
    pub fn items_endpoint(&self) -> Result<Url> {
        self.endpoint(self.items_url.as_deref(), &self.items_path)
    }

    fn endpoint(&self, full_url: Option<&str>, path: &str) -> Result<Url> {
        let url = match full_url {
            Some(full) => parse_http_url(full)?,
            None => join_base(parse_http_url(&self.api_base_url)?, path)?,
        };
        Ok(url)
    }
}

/// Append `path` below the base URL's own path
///
/// `Url::join` with an absolute path would replace a prefix such as
/// `/demo_panda`, so the base is treated as a directory and the path as relative.
fn join_base(mut base: Url, path: &str) -> Result<Url> {
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::config(format!("Invalid endpoint path '{}': {}", path, e)))
}

/// Parse an absolute http(s) URL
fn parse_http_url(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw)
        .map_err(|e| Error::config(format!("Invalid URL '{}': {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::config(format!(
            "URL '{}' must use http or https, not {}",
            raw, other
        ))),
    }
}
