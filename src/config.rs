use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::http::headers::{HeaderInit, HeaderStore};
use crate::log::{info, warning};

static CONFIG: OnceLock<HeadersConfig> = OnceLock::new();

/// Headers added to every message unless the caller already provides them.
///
/// ```toml
/// server_name = "edge/1.0"
/// default_request_headers = [["Accept", "*/*"]]
///
/// [default_response_headers]
/// X-Frame-Options = "DENY"
/// Cache-Control = ["no-cache", "no-store"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    pub server_name: String,
    pub default_request_headers: HeaderInit,
    pub default_response_headers: HeaderInit,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            server_name: "headerstore/0.1".to_string(),
            default_request_headers: HeaderInit::Empty,
            default_response_headers: HeaderInit::Empty,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to deserialize config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HeadersConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Same as [`load`](Self::load) but falls back to the default config on
    /// any error.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warning!("{err}, falling back to default config");
                let _ = err;
                HeadersConfig::default()
            }
        }
    }

    pub fn request_defaults(&self) -> HeaderStore {
        HeaderStore::with_init(self.default_request_headers.clone())
    }

    pub fn response_defaults(&self) -> HeaderStore {
        HeaderStore::with_init(self.default_response_headers.clone())
    }
}

/// Installs the global config.
///
/// Returns the given config back if one was already installed.
pub fn set_config(cfg: HeadersConfig) -> Result<(), HeadersConfig> {
    info!("installing headers config, server name {:?}", cfg.server_name);
    CONFIG.set(cfg)
}

/// Returns the global config, installing the default one if none was set.
pub fn config() -> &'static HeadersConfig {
    CONFIG.get_or_init(HeadersConfig::default)
}
