//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetching behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::config("fetcher.user_agent is empty"));
        }
        if self.fetcher.page_timeout_secs == 0 {
            return Err(AppError::config("fetcher.page_timeout_secs must be > 0"));
        }
        if self.fetcher.download_timeout_secs == 0 {
            return Err(AppError::config(
                "fetcher.download_timeout_secs must be > 0",
            ));
        }
        if self.paths.output.as_os_str().is_empty() {
            return Err(AppError::config("paths.output is empty"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for all requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Timeout for the target page fetch in seconds
    #[serde(default = "defaults::page_timeout")]
    pub page_timeout_secs: u64,

    /// Longer timeout for PDF downloads in seconds
    #[serde(default = "defaults::download_timeout")]
    pub download_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            page_timeout_secs: defaults::page_timeout(),
            download_timeout_secs: defaults::download_timeout(),
        }
    }
}

/// Filesystem location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory that receives downloaded files and run logs
    #[serde(default = "defaults::output_dir")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: defaults::output_dir(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            .into()
    }
    pub fn page_timeout() -> u64 {
        30
    }
    pub fn download_timeout() -> u64 {
        60
    }
    pub fn output_dir() -> PathBuf {
        PathBuf::from("downloaded_pdfs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetcher.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetcher.page_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_output_directory() {
        let config = Config::default();
        assert_eq!(config.paths.output, PathBuf::from("downloaded_pdfs"));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [fetcher]
            page_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.fetcher.page_timeout_secs, 5);
        assert_eq!(config.fetcher.download_timeout_secs, 60);
        assert!(config.fetcher.user_agent.starts_with("Mozilla/5.0"));
    }
}
