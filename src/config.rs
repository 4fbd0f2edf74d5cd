// SPDX-License-Identifier: PMPL-1.0-or-later

//! Client configuration: a YAML file plus environment overrides.
//!
//! Lookup order for the file: explicit path, `$TAMIL_SITE_CONFIG`, then
//! `<config dir>/tamil-site/config.yaml`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::admin::DEFAULT_PAGE_SIZE;
use crate::theme::TransitionTiming;

pub const CONFIG_ENV: &str = "TAMIL_SITE_CONFIG";
pub const API_URL_ENV: &str = "TAMIL_SITE_API_URL";
pub const STORAGE_ENV: &str = "TAMIL_SITE_STORAGE";

const APP_DIR: &str = "tamil-site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub apply_delay_ms: u64,
    pub settle_delay_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let timing = TransitionTiming::default();
        Self {
            apply_delay_ms: timing.apply_delay.as_millis() as u64,
            settle_delay_ms: timing.settle_delay.as_millis() as u64,
        }
    }
}

impl ThemeConfig {
    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            apply_delay: Duration::from_millis(self.apply_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api_base_url: String,
    /// Preference file; `None` means the platform data directory.
    pub storage_path: Option<PathBuf>,
    pub page_size: usize,
    pub request_timeout_secs: u64,
    /// Stylesheet the theme palette is written to.
    pub css_output: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            storage_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
            css_output: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load from `explicit`, else the environment/default location, then
    /// apply environment overrides and validate.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(default_config_path);

        let mut config = match &path {
            Some(path) => Self::from_file(path, explicit.is_some())?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Read one file. A missing file is only an error when `required`.
    pub fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_yaml(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Some(path) = std::env::var_os(STORAGE_ENV) {
            if !path.is_empty() {
                self.storage_path = Some(PathBuf::from(path));
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::invalid_value(
                    "api_base_url",
                    format!("'{}' is not an http(s) URL", self.api_base_url),
                ))
            }
        }
        if self.page_size == 0 {
            return Err(ConfigError::invalid_value("page_size", "must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "request_timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Preference file location, falling back to the platform data dir and
    /// finally the working directory.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("preferences.json")
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}
