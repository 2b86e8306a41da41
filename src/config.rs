//! Loading the shortcut table from configuration files
//!
//! The table is JSON in the host application (`keyboardShortcuts.json`
//! style), but hand-written tables read better as YAML, so both parse into
//! the same [`ShortcutsConfig`].

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::shortcut::ShortcutsConfig;

/// Errors that can occur when loading a shortcut table
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    UnsupportedFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported config format: '{}' (expected json, yaml or yml)", ext)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a shortcut table from a file, dispatching on the extension
pub fn load_shortcuts_file(path: &Path) -> Result<ShortcutsConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let config = match extension.as_str() {
        "json" => parse_shortcuts_json(&content)?,
        "yaml" | "yml" => parse_shortcuts_yaml(&content)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), contexts = config.context_names().count(), "loaded shortcut table");
    Ok(config)
}

/// Parse a shortcut table from a JSON string
pub fn parse_shortcuts_json(json: &str) -> Result<ShortcutsConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Parse a shortcut table from a YAML string
pub fn parse_shortcuts_yaml(yaml: &str) -> Result<ShortcutsConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
}
