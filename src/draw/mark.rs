//! Committed drawing primitives.

use super::color::Color;
use super::font::FontDescriptor;
use super::geometry::Outline;

/// A single drawable mark, either a stroked outline or a block of text.
///
/// Marks are transient: once rendered into a page surface the pixels are the
/// only record, so variants carry everything the renderer needs and nothing
/// more.
#[derive(Clone, Debug)]
pub enum Mark {
    /// Stroked outline (freehand segments, shape previews, committed shapes)
    Stroke {
        /// Geometry to stroke
        outline: Outline,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        width: f64,
    },
    /// Text block anchored at its top-left corner
    Text {
        /// Left edge of the laid-out text
        x: f64,
        /// Top edge of the laid-out text
        y: f64,
        /// Text content to display
        text: String,
        /// Fill color
        color: Color,
        /// Font size in points
        size: f64,
        /// Font descriptor (family, weight, style)
        font: FontDescriptor,
    },
}
