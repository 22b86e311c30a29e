use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CLOB_HOST: &str = "https://clob.polymarket.com";
pub const CONFIG_PATH_ENV: &str = "POLYMARKET_MCP_CONFIG";

/// Process-level settings: which transport to run and where.
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self {
            mode,
            port,
            deprecate_rest,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Connection settings for the CLOB backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub host: String,
    pub connect_timeout_ms: u64,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_CLOB_HOST.to_string(),
            connect_timeout_ms: 2_000,
            timeout_ms: 10_000,
        }
    }
}

/// File-backed configuration; environment variables win over the file.
///
/// ```toml
/// [backend]
/// host = "https://clob.polymarket.com"
/// connect_timeout_ms = 2000
/// timeout_ms = 10000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("CLOB_HOST") {
            if !host.trim().is_empty() {
                self.backend.host = host.trim().to_string();
            }
        }
        if let Some(ms) = env_u64("CLOB_CONNECT_TIMEOUT_MS") {
            self.backend.connect_timeout_ms = ms;
        }
        if let Some(ms) = env_u64("CLOB_TIMEOUT_MS") {
            self.backend.timeout_ms = ms;
        }
        self
    }

    pub fn from_env_and_toml() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self::load(path.as_deref())?.with_env_overrides())
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.trim().parse::<u64>().ok())
}
