use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// First path segment of every documentation page eligible for redirects
pub const DEFAULT_DOC_PREFIX: &str = "javadoc";

/// Well-known manifest location, resolved against the current origin
pub const DEFAULT_MANIFEST_PATH: &str = "/javadoc/versions.json";

/// Timeout for the manifest request in milliseconds (10 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Redirect configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RedirectConfig {
    /// Documentation root segment, e.g. `javadoc` for `/javadoc/<version>/...`
    pub doc_prefix: String,
    /// Absolute manifest URL, or a path joined onto the current origin
    pub manifest_url: String,
    /// Manifest request timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            doc_prefix: DEFAULT_DOC_PREFIX.to_string(),
            manifest_url: DEFAULT_MANIFEST_PATH.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl RedirectConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Returns the path to the data directory for version-redirect.
/// Uses $XDG_DATA_HOME/version-redirect if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-redirect,
/// or ./version-redirect if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-redirect.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-redirect")
}
