//! Rendering primitives and shape geometry (Cairo-based).
//!
//! This module defines the core drawing types used by the whiteboard:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`ShapeKind`] / [`Outline`]: drag-box shapes and their resolved geometry
//! - [`Mark`]: a committable primitive (stroked outline or text block)
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod geometry;
pub mod mark;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use geometry::{Outline, ShapeKind, outline};
pub use mark::Mark;
pub use render::{render_mark, render_outline, render_text};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
