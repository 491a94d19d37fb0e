//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::FontDescriptor;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Pages are fixed-size rasters; these values are read once at startup and
/// apply to every page of the document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Page width in pixels (valid range: 128 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Page height in pixels (valid range: 128 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Page background - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 255, 240]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing tool defaults.
///
/// Controls the pen when the board first opens. Users change these at
/// runtime through the color and width prompts.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color - named color or RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_stroke_width: default_stroke_width(),
        }
    }
}

/// Text tool settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextConfig {
    /// Font family name for text rendering (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Note: Install fonts system-wide and reference by family name
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Default font size in points (valid range: 8.0 - 144.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font style tokens, space separated (e.g., "normal", "bold", "bold italic")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl TextConfig {
    /// Builds the font descriptor for the configured family and style.
    ///
    /// Validation already forced `font_style` to something parseable, so the
    /// fallback only matters for descriptors built before validation ran.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::from_style_string(&self.font_family, &self.font_style).unwrap_or_else(
            || {
                FontDescriptor::new(
                    self.font_family.clone(),
                    "normal".to_string(),
                    "normal".to_string(),
                )
            },
        )
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_style: default_font_style(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// PDF resolution in pixels per inch (valid range: 36.0 - 600.0)
    /// Higher values shrink the physical page size of the output
    #[serde(default = "default_export_dpi")]
    pub dpi: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dpi: default_export_dpi(),
        }
    }
}

// Default value functions for serde

fn default_canvas_width() -> u32 {
    1600
}

fn default_canvas_height() -> u32 {
    1200
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    20.0
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_export_dpi() -> f64 {
    100.0
}
