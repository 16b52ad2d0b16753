//! Application settings loaded from a TOML file.
//!
//! The file is looked up at `$RUSTY_SONAR_CONFIG`, falling back to
//! `rusty-sonar.toml` in the working directory. Every section is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "RUSTY_SONAR_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "rusty-sonar.toml";
pub const DEFAULT_ENDPOINT: &str = "https://sonar-rock-vs-mine-api.onrender.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    Remote,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub kind: ClassifierKind,
    /// Base URL; `/predict` is appended.
    pub endpoint: String,
    /// Whole-request timeout in seconds, `0` for none.
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::Remote,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Require exactly 60 values within `[0, 1]`.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a row shows "Copied!" after its copy button is pressed.
    pub copy_feedback_ms: u64,
    /// Sample set to show instead of the built-in examples.
    pub samples_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 1500,
            samples_file: None,
        }
    }
}

impl UiConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub validation: ValidationConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Config file location from the environment, or the default file name.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`AppConfig::load_from`] on the default path, but never fails:
    /// a broken file is logged and the defaults are used.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        Self::load_from(&path).unwrap_or_else(|err| {
            log::error!("{err}; falling back to defaults");
            Self::default()
        })
    }
}
