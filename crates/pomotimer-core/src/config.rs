//! TOML-based startup defaults.
//!
//! Read from `~/.config/pomotimer/config.toml` when present. The file
//! is load-only: it seeds the duration fields and the haptics toggle at
//! startup, and the app never writes runtime state back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::{Durations, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_focus_min")]
    pub focus_min: u32,
    #[serde(default = "default_break_min")]
    pub break_min: u32,
    /// Whether the completion pulse is enabled.
    #[serde(default = "default_true")]
    pub haptics: bool,
}

fn default_focus_min() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

fn default_break_min() -> u32 {
    DEFAULT_BREAK_MINUTES
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_min: DEFAULT_FOCUS_MINUTES,
            break_min: DEFAULT_BREAK_MINUTES,
            haptics: true,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/pomotimer/config.toml`).
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pomotimer").join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Resolved durations implied by the configured minutes.
    ///
    /// Config values pass through the same resolver as field text, so an
    /// out-of-range file value clamps instead of breaking the timer.
    pub fn durations(&self) -> Durations {
        Durations::resolve(&self.focus_min.to_string(), &self.break_min.to_string())
    }
}
