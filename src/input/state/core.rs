//! Board state machine and tool state management.

use crate::config::Config;
use crate::display::DisplaySurface;
use crate::draw::{Color, FontDescriptor, Mark, render_mark};
use crate::input::tool::Tool;
use crate::page::{PageError, PageStore};

/// Current pointer gesture state machine.
///
/// One gesture runs from pointer-down to pointer-up. The text tool never
/// enters `Dragging`; its placement happens entirely on pointer-down.
#[derive(Debug, Clone, Copy)]
pub enum Gesture {
    /// Not interacting - waiting for a pointer press
    Idle,
    /// Pointer held down and dragging
    Dragging {
        /// Tool captured at press time; switching tools mid-drag does not
        /// retarget the gesture
        tool: Tool,
        /// Where the pointer went down. For pen and eraser this advances to
        /// the last committed point; for shapes it stays on the drag origin.
        anchor: (f64, f64),
    },
}

/// Main board state: the document plus every runtime drawing parameter.
///
/// The state owns the pages and decides what pointer events and menu actions
/// mean. It draws onto pages itself and mirrors the results onto a
/// [`DisplaySurface`]; prompting goes through the
/// [`Dialogs`](crate::dialog::Dialogs) seam. Both are passed per call so the
/// backend can own them.
pub struct BoardState {
    /// The document: all pages plus the current page cursor
    pub pages: PageStore,
    /// Currently selected tool
    pub tool: Tool,
    /// Current drawing color
    pub color: Color,
    /// Stroke width in pixels, shared by pen, eraser, and shape outlines
    pub stroke_width: f64,
    /// Font size for the text tool in points
    pub font_size: f64,
    /// Font for the text tool (family, weight, style)
    pub font: FontDescriptor,
    /// Page background color; the eraser paints with this
    pub background: Color,
    /// Current pointer gesture
    pub gesture: Gesture,
    /// Whether the user requested to quit
    pub should_exit: bool,
    /// PDF export resolution in pixels per inch (from config)
    pub export_dpi: f64,
}

impl BoardState {
    /// Creates the board state described by the configuration, with one
    /// blank page.
    pub fn new(config: &Config) -> Result<Self, PageError> {
        let background = config.canvas.background.to_color();
        let pages = PageStore::new(
            config.canvas.width as i32,
            config.canvas.height as i32,
            background,
        )?;

        Ok(Self {
            pages,
            tool: Tool::Pen,
            color: config.drawing.default_color.to_color(),
            stroke_width: config.drawing.default_stroke_width,
            font_size: config.text.font_size,
            font: config.text.font_descriptor(),
            background,
            gesture: Gesture::Idle,
            should_exit: false,
            export_dpi: config.export.dpi,
        })
    }

    /// Renders a mark permanently into the current page, then mirrors it
    /// onto the display.
    ///
    /// The page context is checked after drawing so a failed commit
    /// surfaces instead of silently dropping ink.
    pub(super) fn commit_mark(
        &mut self,
        display: &mut dyn DisplaySurface,
        mark: &Mark,
    ) -> Result<(), PageError> {
        {
            let ctx = self.pages.current().painter()?;
            render_mark(&ctx, mark);
            ctx.status()?;
        }
        display.draw_mark(mark);
        Ok(())
    }

    /// Abandons any in-flight drag, discarding its preview.
    pub(super) fn cancel_gesture(&mut self, display: &mut dyn DisplaySurface) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
            display.clear_preview();
        }
    }
}
