use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use sevenfold_types::ui::UiOptions;

/// Forces ASCII glyphs when set to a truthy value.
pub const ASCII_ENV: &str = "SEVENFOLD_ASCII";
/// Disables screen fades and decorative motion when set to a truthy value.
pub const REDUCED_MOTION_ENV: &str = "SEVENFOLD_REDUCED_MOTION";

#[derive(Debug, Default, Deserialize)]
pub struct SevenfoldConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and decorations.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable screen fades and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl SevenfoldConfig {
    /// Load from `~/.sevenfold/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sevenfold").join("config.toml"))
}

/// Resolve view options from the config file and the process environment.
pub fn ui_options(config: Option<&SevenfoldConfig>) -> UiOptions {
    ui_options_with_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn ui_options_with_env(
    config: Option<&SevenfoldConfig>,
    env: impl Fn(&str) -> Option<String>,
) -> UiOptions {
    let app = config.and_then(|cfg| cfg.app.as_ref());
    let flag = |key: &str| env(key).is_some_and(|value| is_truthy(&value));
    UiOptions {
        ascii_only: app.map(|cfg| cfg.ascii_only).unwrap_or(false) || flag(ASCII_ENV),
        high_contrast: app.map(|cfg| cfg.high_contrast).unwrap_or(false),
        reduced_motion: app.map(|cfg| cfg.reduced_motion).unwrap_or(false)
            || flag(REDUCED_MOTION_ENV),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
