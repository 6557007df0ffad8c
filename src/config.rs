//! TOML configuration file support.
//!
//! The configuration file lives at `$XDG_CONFIG_HOME/padcalc/config.toml`
//! (typically `~/.config/padcalc/config.toml`). A missing file is not an
//! error; defaults are used.
//!
//! # Priority (highest first)
//!
//! 1. CLI arguments (applied by the caller)
//! 2. Environment variables (`PADCALC_FORMAT`, `PADCALC_GROUP`)
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example
//!
//! ```toml
//! [display]
//! format = "compact"
//! group_thousands = true
//!
//! [clipboard]
//! copy_on_equal = false
//! ```

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calculator::ResultFormat;
use crate::error::ConfigError;

pub const FORMAT_ENV: &str = "PADCALC_FORMAT";
pub const GROUP_ENV: &str = "PADCALC_GROUP";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: ResultFormat,
    /// Insert thousand separators when rendering the display.
    pub group_thousands: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful result in interactive mode.
    pub copy_on_equal: bool,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Override values from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FORMAT_ENV) {
            self.display.format =
                ResultFormat::from_str(&value, true).map_err(|_| ConfigError::InvalidEnv {
                    key: FORMAT_ENV.to_string(),
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(GROUP_ENV) {
            self.display.group_thousands = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
                key: GROUP_ENV.to_string(),
                value,
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get the default configuration file path.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("padcalc").join("config.toml"))
}

/// Load configuration from `path` (or the default path) and the process
/// environment.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);

    let mut config = match path {
        Some(config_path) => load_file(&config_path)?,
        None => Config::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

/// Load a configuration file, falling back to defaults if it does not exist.
pub fn load_file(config_path: &Path) -> Result<Config, ConfigError> {
    if !config_path.exists() {
        tracing::debug!(
            path = %config_path.display(),
            "Config file not found, using defaults"
        );
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Read {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    let config = Config::from_toml(&text)?;

    tracing::info!(path = %config_path.display(), "Loaded configuration from file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.format, ResultFormat::Canonical);
        assert!(!config.display.group_thousands);
        assert!(!config.clipboard.copy_on_equal);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            r#"
            [display]
            format = "compact"
            group_thousands = true

            [clipboard]
            copy_on_equal = true
            "#,
        )
        .unwrap();
        assert_eq!(config.display.format, ResultFormat::Compact);
        assert!(config.display.group_thousands);
        assert!(config.clipboard.copy_on_equal);
    }

    #[test]
    fn test_partial_section() {
        let config = Config::from_toml("[display]\ngroup_thousands = true\n").unwrap();
        assert_eq!(config.display.format, ResultFormat::Canonical);
        assert!(config.display.group_thousands);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::from_toml("[display]\nformat = \"roman\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(FORMAT_ENV, "Compact"), (GROUP_ENV, "yes")].into();
        let mut config = Config::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.display.format, ResultFormat::Compact);
        assert!(config.display.group_thousands);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == GROUP_ENV).then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { ref key, .. } if key == GROUP_ENV));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join("padcalc-test-missing")
            .join("config.toml");
        assert_eq!(load_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_file() {
        let path =
            std::env::temp_dir().join(format!("padcalc-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[display]\nformat = \"compact\"\n").unwrap();
        let config = load_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().display.format, ResultFormat::Compact);
    }
}
