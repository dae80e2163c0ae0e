use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::TextStyle;

/// Environment variable naming a JSON config file (native builds only)
pub const CONFIG_ENV_VAR: &str = "TEXT_OVERLAY_CONFIG";

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("history_limit must be at least 1")]
    InvalidHistoryLimit,

    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),
}

/// Startup settings for an editor session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults
pub struct EditorConfig {
    /// Toolbar style at startup, inherited by new elements
    pub default_style: TextStyle,
    /// Cap on undo depth, unbounded when absent
    pub history_limit: Option<usize>,
    /// Whether the history window starts open
    pub show_history_panel: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_style: TextStyle::default(),
            history_limit: None,
            show_history_panel: false,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        let size = self.default_style.font_size.pixels();
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(size));
        }
        Ok(())
    }

    /// Load the file named by `TEXT_OVERLAY_CONFIG`, or `None` if the variable is unset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Ok(None);
        };
        log::info!("Loading config from {}", path);
        let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&json).map(Some)
    }
}
