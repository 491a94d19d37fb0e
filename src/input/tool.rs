//! Drawing tool selection.

use crate::draw::ShapeKind;

/// Drawing tool selection.
///
/// The active tool decides what a pointer gesture produces. Exactly one tool
/// is active at a time; shape tools carry the kind of shape they stamp out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - commits segments as the pointer moves (default)
    Pen,
    /// Freehand erasing - paints with the page background color
    Eraser,
    /// Corner-to-corner shape stamping with a live preview
    Shape(ShapeKind),
    /// Click-to-place text; reverts to Pen after each placement
    Text,
}

impl Tool {
    /// Human-readable tool label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Shape(kind) => kind.label(),
            Tool::Text => "Text",
        }
    }
}
