use crate::dialog::Dialogs;
use crate::display::DisplaySurface;
use crate::draw::{Mark, Outline, ShapeKind, outline};
use crate::input::{events::PointerButton, tool::Tool};
use crate::page::PageError;
use crate::util;

use super::{BoardState, Gesture};

impl BoardState {
    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - Left press with the text tool: prompts for text and commits it at
    ///   the press position, then falls back to the pen
    /// - Left press with any other tool: starts a drag gesture
    /// - Other buttons: ignored
    pub fn on_pointer_press(
        &mut self,
        display: &mut dyn DisplaySurface,
        dialogs: &dyn Dialogs,
        button: PointerButton,
        x: f64,
        y: f64,
    ) -> Result<(), PageError> {
        if button != PointerButton::Left {
            return Ok(());
        }

        match self.tool {
            Tool::Text => self.place_text(display, dialogs, x, y),
            tool => {
                display.clear_preview();
                self.gesture = Gesture::Dragging {
                    tool,
                    anchor: (x, y),
                };
                Ok(())
            }
        }
    }

    /// Processes pointer motion while a gesture may be in flight.
    ///
    /// # Behavior
    /// - Pen/eraser drag: commits the segment from the anchor to the new
    ///   position, then moves the anchor forward
    /// - Shape drag: replaces the transient preview built from the raw drag
    ///   corners
    /// - Idle: does nothing
    pub fn on_pointer_motion(
        &mut self,
        display: &mut dyn DisplaySurface,
        x: f64,
        y: f64,
    ) -> Result<(), PageError> {
        let Gesture::Dragging { tool, anchor } = self.gesture else {
            return Ok(());
        };

        match tool {
            Tool::Pen | Tool::Eraser => {
                let color = if tool == Tool::Eraser {
                    self.background
                } else {
                    self.color
                };
                let mark = Mark::Stroke {
                    outline: Outline::Segment {
                        x1: anchor.0,
                        y1: anchor.1,
                        x2: x,
                        y2: y,
                    },
                    color,
                    width: self.stroke_width,
                };
                self.commit_mark(display, &mark)?;
                self.gesture = Gesture::Dragging {
                    tool,
                    anchor: (x, y),
                };
            }
            Tool::Shape(kind) => {
                display.show_preview(Mark::Stroke {
                    outline: outline(kind, anchor, (x, y)),
                    color: self.color,
                    width: self.stroke_width,
                });
            }
            // Text never drags
            Tool::Text => {}
        }

        Ok(())
    }

    /// Processes a pointer button release, ending the gesture.
    ///
    /// Shape tools commit their final outline here, built from the
    /// normalized drag box so dragging in any direction gives the same
    /// shape. The line tool is the exception and keeps its endpoints in drag
    /// order. Pen and eraser already committed during motion.
    pub fn on_pointer_release(
        &mut self,
        display: &mut dyn DisplaySurface,
        button: PointerButton,
        x: f64,
        y: f64,
    ) -> Result<(), PageError> {
        if button != PointerButton::Left {
            return Ok(());
        }

        let Gesture::Dragging { tool, anchor } = self.gesture else {
            return Ok(());
        };
        // The gesture is over even if the commit below fails.
        self.gesture = Gesture::Idle;

        if let Tool::Shape(kind) = tool {
            display.clear_preview();
            let (a, b) = if kind == ShapeKind::Line {
                (anchor, (x, y))
            } else {
                util::normalized_corners(anchor, (x, y))
            };
            let mark = Mark::Stroke {
                outline: outline(kind, a, b),
                color: self.color,
                width: self.stroke_width,
            };
            self.commit_mark(display, &mark)?;
        }

        Ok(())
    }

    /// Prompts for text and commits it with its top-left corner at the
    /// press position.
    ///
    /// A cancelled or empty prompt changes nothing, not even the tool; a
    /// successful placement selects the pen.
    fn place_text(
        &mut self,
        display: &mut dyn DisplaySurface,
        dialogs: &dyn Dialogs,
        x: f64,
        y: f64,
    ) -> Result<(), PageError> {
        let Some(text) = dialogs.ask_string("Enter text") else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        let mark = Mark::Text {
            x,
            y,
            text,
            color: self.color,
            size: self.font_size,
            font: self.font.clone(),
        };
        self.commit_mark(display, &mark)?;

        self.tool = Tool::Pen;
        log::debug!("Text placed at ({x:.0}, {y:.0}), tool reset to Pen");
        Ok(())
    }
}
