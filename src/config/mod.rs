// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The configuration directory resolves in order of precedence: an explicit
//! `--config-dir` flag, the `ICED_RECORDS_CONFIG_DIR` environment variable,
//! then the platform configuration directory.

use crate::browser::{DEFAULT_ROWS_PER_PAGE, DEFAULT_WIDE_BREAKPOINT, ROWS_PER_PAGE_OPTIONS};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedRecords";
const CONFIG_DIR_ENV: &str = "ICED_RECORDS_CONFIG_DIR";

/// Minimum sensible wide breakpoint; persisted configs below it are clamped.
const MIN_WIDE_BREAKPOINT: f32 = 400.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub rows_per_page: Option<usize>,
    #[serde(default)]
    pub wide_breakpoint: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            rows_per_page: Some(DEFAULT_ROWS_PER_PAGE),
            wide_breakpoint: Some(DEFAULT_WIDE_BREAKPOINT),
        }
    }
}

impl Config {
    /// Page size with out-of-catalog values snapped to the nearest offered
    /// option, so a hand-edited file cannot request a size the rows-per-page
    /// control would not show.
    #[must_use]
    pub fn effective_rows_per_page(&self) -> usize {
        let requested = self.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE);
        ROWS_PER_PAGE_OPTIONS
            .into_iter()
            .min_by_key(|option| option.abs_diff(requested))
            .unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }

    /// Breakpoint with nonsensical persisted values clamped.
    #[must_use]
    pub fn effective_wide_breakpoint(&self) -> f32 {
        self.wide_breakpoint
            .unwrap_or(DEFAULT_WIDE_BREAKPOINT)
            .max(MIN_WIDE_BREAKPOINT)
    }
}

fn config_dir(flag_override: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = flag_override {
        return Some(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path(flag_override: Option<&str>) -> Option<PathBuf> {
    config_dir(flag_override).map(|dir| dir.join(CONFIG_FILE))
}

pub fn load(flag_override: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path(flag_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, flag_override: Option<&str>) -> Result<()> {
    if let Some(path) = config_path(flag_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|err| Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            theme_mode: ThemeMode::Dark,
            rows_per_page: Some(25),
            wide_breakpoint: Some(1100.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn rows_per_page_snaps_to_offered_options() {
        let config = Config {
            rows_per_page: Some(7),
            ..Config::default()
        };
        assert!(ROWS_PER_PAGE_OPTIONS.contains(&config.effective_rows_per_page()));

        let unset = Config {
            rows_per_page: None,
            ..Config::default()
        };
        assert_eq!(unset.effective_rows_per_page(), DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn wide_breakpoint_is_clamped() {
        let config = Config {
            wide_breakpoint: Some(10.0),
            ..Config::default()
        };
        assert_eq!(config.effective_wide_breakpoint(), MIN_WIDE_BREAKPOINT);
    }

    #[test]
    fn flag_override_takes_precedence() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().to_string_lossy().into_owned();

        let config = Config {
            theme_mode: ThemeMode::Light,
            ..Config::default()
        };
        save(&config, Some(&dir)).expect("save with override");
        let loaded = load(Some(&dir)).expect("load with override");
        assert_eq!(loaded.theme_mode, ThemeMode::Light);
    }
}
