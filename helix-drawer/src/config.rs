//! Configuration for the drawer demo application.
//!
//! Configuration is loaded from `~/.config/helix/drawer.toml` and provides
//! window and logging settings plus the defaults applied to every drawer the
//! demo opens.

use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::drawer::{Dimension, DrawerOptions, Placement, PushConfig, DEFAULT_PUSH_DISTANCE};

/// Errors raised while loading `drawer.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not determine the user configuration directory")]
    NoConfigDir,
}

/// Application configuration loaded from `drawer.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DrawerAppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub drawer: DrawerDefaults,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Defaults applied to every drawer of the demo.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawerDefaults {
    pub placement: Placement,
    pub push: PushConfig,
    pub width: Dimension,
    pub height: Dimension,
    pub mask: bool,
    pub mask_closable: bool,
    pub keyboard: bool,
    pub auto_focus: bool,
    pub motion: bool,
    pub destroy_on_close: bool,
    pub default_push_distance: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "drawer-demo".to_string(),
            width: 1100.0,
            height: 720.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("helix-drawer.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl Default for DrawerDefaults {
    fn default() -> Self {
        let options = DrawerOptions::default();
        Self {
            placement: options.placement,
            push: options.push,
            width: options.width,
            height: options.height,
            mask: options.mask,
            mask_closable: options.mask_closable,
            keyboard: options.keyboard,
            auto_focus: options.auto_focus,
            motion: options.motion,
            destroy_on_close: options.destroy_on_close,
            default_push_distance: DEFAULT_PUSH_DISTANCE,
        }
    }
}

impl DrawerDefaults {
    /// Closed drawer options carrying these defaults.
    #[must_use]
    pub fn to_options(&self) -> DrawerOptions {
        let default_push_distance = if self.default_push_distance.is_finite() {
            self.default_push_distance
        } else {
            log::warn!(
                "default_push_distance is not finite, using {DEFAULT_PUSH_DISTANCE}"
            );
            DEFAULT_PUSH_DISTANCE
        };
        DrawerOptions {
            placement: self.placement,
            push: self.push,
            width: self.width.clone(),
            height: self.height.clone(),
            mask: self.mask,
            mask_closable: self.mask_closable,
            keyboard: self.keyboard,
            auto_focus: self.auto_focus,
            motion: self.motion,
            destroy_on_close: self.destroy_on_close,
            default_push_distance,
            ..DrawerOptions::default()
        }
    }
}

impl DrawerAppConfig {
    /// Path of the default configuration file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let strategy = etcetera::choose_base_strategy().map_err(|_| ConfigError::NoConfigDir)?;
        Ok(strategy.config_dir().join("helix").join("drawer.toml"))
    }

    /// Load configuration from the default location (`~/.config/helix/drawer.toml`).
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::debug!("no config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Self>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the placement of every drawer.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.drawer.placement = placement;
        self
    }

    /// Enable or disable the mask of every drawer.
    #[must_use]
    pub fn with_mask(mut self, mask: bool) -> Self {
        self.drawer.mask = mask;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults() {
        let config = DrawerAppConfig::default();
        assert_eq!(config.window.title, "drawer-demo");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.drawer.placement, Placement::Right);
        assert_eq!(config.drawer.push, PushConfig::default());
        assert!(config.drawer.mask);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[window]
title = "Drawers"

[drawer]
placement = "left"
push = { distance = 64 }
width = "30rem"
"#,
        );
        let config = DrawerAppConfig::load_from(file.path()).expect("should load");
        assert_eq!(config.window.title, "Drawers");
        assert!((config.window.width - 1100.0).abs() < f64::EPSILON);
        assert_eq!(config.drawer.placement, Placement::Left);
        assert_eq!(config.drawer.push, PushConfig::distance(64.0));

        let options = config.drawer.to_options();
        assert!(!options.open);
        assert_eq!(options.panel_size().to_css(), "30rem");
    }

    #[test]
    fn malformed_push_distance_does_not_fail_load() {
        let file = write_config("[drawer]\npush = { distance = \"wide\" }\n");
        let config = DrawerAppConfig::load_from(file.path()).expect("should load");
        assert_eq!(config.drawer.push, PushConfig::default());
    }

    #[test]
    fn push_false_disables() {
        let file = write_config("[drawer]\npush = false\n");
        let config = DrawerAppConfig::load_from(file.path()).expect("should load");
        assert_eq!(config.drawer.to_options().push, PushConfig::Disabled);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let file = write_config("[window\ntitle = 1");
        let err = DrawerAppConfig::load_from(file.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = DrawerAppConfig::load_from(&dir.path().join("absent.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn non_finite_default_distance_falls_back() {
        let defaults = DrawerDefaults {
            default_push_distance: f64::NAN,
            ..DrawerDefaults::default()
        };
        let options = defaults.to_options();
        assert!((options.default_push_distance - DEFAULT_PUSH_DISTANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn builders() {
        let config = DrawerAppConfig::default()
            .with_window_title("t")
            .with_window_size(10.0, 20.0)
            .with_log_level("debug")
            .with_placement(Placement::Bottom)
            .with_mask(false);
        assert_eq!(config.window.title, "t");
        assert!((config.window.height - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.drawer.placement, Placement::Bottom);
        assert!(!config.drawer.mask);
    }
}
