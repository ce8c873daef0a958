//! Editor configuration
//!
//! Serializable settings for the drawing surface: viewport size, editing
//! affordance geometry and colours, and the key binding table. Files are
//! JSON or TOML, chosen by extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vectorpad_core::constants::{
    CONTROL_POINT_SIZE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, HANDLE_PADDING,
};
use vectorpad_core::{KeyBindings, Rgba};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "vectorpad";
const CONFIG_FILE: &str = "config.toml";

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Selection and drawing preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditingSettings {
    /// Side length of vertex control points
    pub control_point_size: f64,
    /// Gap between a selected shape's bounding box and its transform handles
    pub transform_handle_padding: f64,
    /// Stroke colour of the shape being modified
    pub selection_stroke: Rgba,
    /// Stroke colour of newly drawn shapes
    pub default_stroke: Rgba,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            control_point_size: CONTROL_POINT_SIZE,
            transform_handle_padding: HANDLE_PADDING,
            selection_stroke: Rgba::RED,
            default_stroke: Rgba::BLACK,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub editing: EditingSettings,
    #[serde(default)]
    pub keys: KeyBindings,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/vectorpad/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.viewport.width == 0 {
            return Err(SettingsError::invalid("viewport.width", "must be > 0"));
        }
        if self.viewport.height == 0 {
            return Err(SettingsError::invalid("viewport.height", "must be > 0"));
        }

        let size = self.editing.control_point_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(SettingsError::invalid(
                "editing.control_point_size",
                "must be > 0",
            ));
        }
        let padding = self.editing.transform_handle_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(SettingsError::invalid(
                "editing.transform_handle_padding",
                "must be >= 0",
            ));
        }

        if let Some(code) = self.keys.conflicts().first() {
            return Err(SettingsError::invalid(
                "keys.commands",
                format!("key code {} is bound more than once", code),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = EditorConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.viewport.width, 1024);
        assert_eq!(config.viewport.height, 768);
        assert_eq!(config.editing.control_point_size, 4.0);
        assert_eq!(config.editing.transform_handle_padding, 10.0);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.yaml")),
            Err(SettingsError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let mut config = EditorConfig::new();
        config.viewport.width = 0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. }) if key == "viewport.width"
        ));

        let mut config = EditorConfig::new();
        config.editing.control_point_size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Ok(path) = EditorConfig::default_path() {
            assert!(path.ends_with("vectorpad/config.toml"));
        }
    }
}
