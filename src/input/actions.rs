//! Menu actions triggered by keyboard shortcuts.

use super::tool::Tool;

/// An operation requested through the keyboard menu.
///
/// The backend translates key presses into actions; the board state carries
/// them out. Actions that need user input (colors, sizes, paths) prompt
/// through the [`Dialogs`](crate::dialog::Dialogs) seam and treat a
/// cancelled prompt as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select a drawing tool
    SetTool(Tool),
    /// Prompt for a new drawing color
    PickColor,
    /// Prompt for a new stroke width
    SetStrokeWidth,
    /// Prompt for a new text size
    SetFontSize,
    /// Prompt for a new text style (normal, bold, italic)
    SetFontStyle,
    /// Wipe the current page back to the background color
    ClearPage,
    /// Go to the next page, creating it if needed
    NextPage,
    /// Go to the previous page
    PreviousPage,
    /// Save every page as a PDF document
    SaveDocument,
    /// Export the current page as a PNG image
    ExportPagePng,
    /// Load an image file onto the current page
    OpenImage,
    /// Cancel the gesture in flight, or quit when idle
    Exit,
}
