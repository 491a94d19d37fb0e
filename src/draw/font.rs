//! Font descriptor for text rendering.

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// This descriptor is passed through the rendering pipeline so the same font
/// lands on the page raster and on the live display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Reference installed system fonts by name
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Builds a descriptor from a family name and a free-form style string.
    ///
    /// The style string is the single-field form used by the font style
    /// dialog and the config file: a whitespace-separated mix of "normal",
    /// "bold", "italic", and "oblique" (e.g. "bold italic").
    ///
    /// Returns `None` when the string contains an unrecognized token, so
    /// callers can treat bad input as a no-op.
    pub fn from_style_string(family: &str, style: &str) -> Option<Self> {
        let mut weight = "normal".to_string();
        let mut slant = "normal".to_string();
        let trimmed = style.trim();
        if trimmed.is_empty() {
            return None;
        }

        for token in trimmed.split_whitespace() {
            match token.to_lowercase().as_str() {
                "normal" => {}
                "bold" => weight = "bold".to_string(),
                "italic" => slant = "italic".to_string(),
                "oblique" => slant = "oblique".to_string(),
                _ => return None,
            }
        }

        Some(Self::new(family.to_string(), weight, slant))
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 32" or "Monospace Italic 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        // Add style if not normal
        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        // Add weight if not normal
        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        // Add size
        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_plain() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(20.0), "Sans 20");
    }

    #[test]
    fn pango_string_italic() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "normal".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(24.0), "Monospace Italic 24");
    }

    #[test]
    fn pango_string_bold_italic() {
        let font = FontDescriptor::from_style_string("Sans", "bold italic").unwrap();
        assert_eq!(font.to_pango_string(16.0), "Sans Italic Bold 16");
    }

    #[test]
    fn style_string_parses_known_tokens() {
        let font = FontDescriptor::from_style_string("Sans", "bold").unwrap();
        assert_eq!(font.weight, "bold");
        assert_eq!(font.style, "normal");

        let font = FontDescriptor::from_style_string("Sans", "Italic").unwrap();
        assert_eq!(font.weight, "normal");
        assert_eq!(font.style, "italic");

        let font = FontDescriptor::from_style_string("Sans", "normal").unwrap();
        assert_eq!(font.weight, "normal");
        assert_eq!(font.style, "normal");
    }

    #[test]
    fn style_string_rejects_unknown_tokens() {
        assert!(FontDescriptor::from_style_string("Sans", "wavy").is_none());
        assert!(FontDescriptor::from_style_string("Sans", "bold wavy").is_none());
        assert!(FontDescriptor::from_style_string("Sans", "").is_none());
    }
}
