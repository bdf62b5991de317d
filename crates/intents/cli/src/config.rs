//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "intents";

/// CLI configuration, read from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Where privileged flags and the theme are persisted
    pub preferences_path: Option<PathBuf>,

    /// Output format used when `--output` is not given
    pub default_output: Option<OutputFormat>,

    /// Set to `false` to disable colored output
    pub color: Option<bool>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            tracing::debug!(path = %config_path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Resolve the preference file: explicit override, then config, then the
    /// per-user default.
    pub fn preferences_path(&self, explicit: Option<&str>) -> CliResult<PathBuf> {
        if let Some(p) = explicit {
            return Ok(PathBuf::from(p));
        }
        if let Some(p) = &self.preferences_path {
            return Ok(p.clone());
        }
        Ok(Self::config_dir()?.join("preferences.json"))
    }

    pub fn output_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.or(self.default_output).unwrap_or_default()
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> CliResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    fn config_dir() -> CliResult<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join(APP_DIR))
    }
}
