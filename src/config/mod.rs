//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! include the canvas geometry, drawing defaults, text defaults, and export
//! resolution.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, TextConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::draw::FontDescriptor;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1600
/// height = 1200
/// background = "white"
///
/// [drawing]
/// default_color = "black"
/// default_stroke_width = 2.0
///
/// [text]
/// font_family = "Sans"
/// font_size = 20.0
/// font_style = "normal"
///
/// [export]
/// dpi = 100.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas geometry and page background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Text tool defaults (font family, size, style)
    #[serde(default)]
    pub text: TextConfig,

    /// Export settings (PDF resolution)
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// oversized surfaces or rendering issues. Invalid values are clamped to
    /// the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 128 - 8192
    /// - `default_stroke_width`: 1.0 - 100.0
    /// - `font_size`: 8.0 - 144.0
    /// - `export.dpi`: 36.0 - 600.0
    fn validate_and_clamp(&mut self) {
        // Canvas dimensions: 128 - 8192
        if !(128..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 128-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(128, 8192);
        }
        if !(128..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 128-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(128, 8192);
        }

        // Stroke width: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width =
                self.drawing.default_stroke_width.clamp(1.0, 100.0);
        }

        // Font size: 8.0 - 144.0
        if !(8.0..=144.0).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-144.0 range",
                self.text.font_size
            );
            self.text.font_size = self.text.font_size.clamp(8.0, 144.0);
        }

        // Export resolution: 36.0 - 600.0 dpi
        if !(36.0..=600.0).contains(&self.export.dpi) {
            log::warn!(
                "Invalid export dpi {:.1}, clamping to 36.0-600.0 range",
                self.export.dpi
            );
            self.export.dpi = self.export.dpi.clamp(36.0, 600.0);
        }

        // Validate font style tokens
        if FontDescriptor::from_style_string(&self.text.font_family, &self.text.font_style)
            .is_none()
        {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/inkboard/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn defaults_describe_a_white_letter_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 1600);
        assert_eq!(config.canvas.height, 1200);
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_stroke_width, 2.0);
        assert_eq!(config.text.font_size, 20.0);
        assert_eq!(config.export.dpi, 100.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 64
            height = 99999

            [drawing]
            default_stroke_width = 0.0

            [export]
            dpi = 1200.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 128);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.default_stroke_width, 1.0);
        assert_eq!(config.export.dpi, 600.0);
    }

    #[test]
    fn bad_font_style_falls_back_to_normal() {
        let mut config: Config = toml::from_str(
            r#"
            [text]
            font_style = "wavy"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.text.font_style, "normal");
    }

    #[test]
    fn rgb_background_survives_parsing() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            background = [255, 255, 240]
            "#,
        )
        .unwrap();
        let color = config.canvas.background.to_color();
        assert!((color.r - 1.0).abs() < 1e-9);
        assert!((color.b - 240.0 / 255.0).abs() < 1e-9);
    }
}
