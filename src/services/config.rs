//! User configuration
//!
//! Stored as JSON in `~/.rolltrack/config.json`. A missing file means
//! defaults; a malformed one is an error so a typo isn't silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::types::{Result, Rgb, RolltrackError};

/// Default accent for heatmap cells
pub const DEFAULT_ACCENT: &str = "#2f81f7";

/// Theme selection: detect from the terminal, or force one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemePreference,
    /// Accent color as `#rrggbb`
    pub accent: String,
    /// Show only the most recent N week columns
    pub weeks: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            accent: DEFAULT_ACCENT.to_string(),
            weeks: None,
        }
    }
}

impl Config {
    /// Default config path (`~/.rolltrack/config.json`)
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| RolltrackError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(".rolltrack").join("config.json"))
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| RolltrackError::Config(format!("{}: {}", path.display(), e)))?;

        if config.weeks == Some(0) {
            return Err(RolltrackError::Config(format!(
                "{}: weeks must be at least 1",
                path.display()
            )));
        }

        config.accent_rgb()?;
        Ok(config)
    }

    /// Parsed accent color
    pub fn accent_rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.accent).ok_or_else(|| {
            RolltrackError::Config(format!("invalid accent color {:?}", self.accent))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.accent, DEFAULT_ACCENT);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"theme": "light"}"#);

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.theme, ThemePreference::Light);
        assert_eq!(config.accent, DEFAULT_ACCENT);
        assert_eq!(config.weeks, None);
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r##"{"theme": "dark", "accent": "#ff7b72", "weeks": 26}"##,
        );

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.accent_rgb().unwrap(), Rgb::new(0xff, 0x7b, 0x72));
        assert_eq!(config.weeks, Some(26));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ theme: ");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, RolltrackError::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"colour": "red"}"#);
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_accent_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"accent": "blue"}"#);
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid accent color"));
    }

    #[test]
    fn test_zero_weeks_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"weeks": 0}"#);
        assert!(Config::load_from(&path).is_err());
    }
}
