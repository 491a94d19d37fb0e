use crate::dialog::Dialogs;
use crate::display::DisplaySurface;
use crate::draw::FontDescriptor;
use crate::export;
use crate::input::actions::Action;
use crate::page::{Page, PageError};
use crate::util;

use super::{BoardState, Gesture};

impl BoardState {
    /// Executes a single board action.
    ///
    /// Prompt-driven actions route through the [`Dialogs`] seam; a cancelled
    /// or invalid reply leaves the state untouched. Export failures are
    /// logged rather than propagated so a bad path never takes the board
    /// down, but page allocation failures are real errors and bubble up.
    pub fn handle_action(
        &mut self,
        display: &mut dyn DisplaySurface,
        dialogs: &dyn Dialogs,
        action: Action,
    ) -> Result<(), PageError> {
        match action {
            Action::SetTool(tool) => {
                self.tool = tool;
                log::info!("Tool: {}", tool.label());
            }
            Action::PickColor => {
                if let Some(color) = dialogs.pick_color(self.color) {
                    self.color = color;
                    log::info!("Color: {}", util::color_to_name(&color));
                }
            }
            Action::SetStrokeWidth => {
                if let Some(width) = dialogs.ask_integer("Stroke width (1-100)") {
                    if (1..=100).contains(&width) {
                        self.stroke_width = f64::from(width);
                        log::info!("Stroke width: {width}");
                    } else {
                        log::warn!("Stroke width {width} out of range, keeping current");
                    }
                }
            }
            Action::SetFontSize => {
                if let Some(size) = dialogs.ask_integer("Font size (8-144)") {
                    if (8..=144).contains(&size) {
                        self.font_size = f64::from(size);
                        log::info!("Font size: {size}");
                    } else {
                        log::warn!("Font size {size} out of range, keeping current");
                    }
                }
            }
            Action::SetFontStyle => {
                if let Some(style) = dialogs.ask_string("Font style (normal, bold, italic)") {
                    match FontDescriptor::from_style_string(&self.font.family, &style) {
                        Some(font) => {
                            self.font = font;
                            log::info!("Font style: {style}");
                        }
                        None => log::warn!("Unknown font style '{style}', keeping current"),
                    }
                }
            }
            Action::ClearPage => {
                self.cancel_gesture(display);
                self.pages.clear_current()?;
                display.refresh_from_page(self.pages.current());
            }
            Action::NextPage => {
                self.cancel_gesture(display);
                self.pages.advance()?;
                display.refresh_from_page(self.pages.current());
                log::info!("Page {}/{}", self.pages.index() + 1, self.pages.page_count());
            }
            Action::PreviousPage => {
                self.cancel_gesture(display);
                if !self.pages.retreat() {
                    log::debug!("Already at the first page");
                }
                display.refresh_from_page(self.pages.current());
                log::info!("Page {}/{}", self.pages.index() + 1, self.pages.page_count());
            }
            Action::SaveDocument => {
                let default = export::default_filename("pdf");
                if let Some(path) = dialogs.save_path(&default) {
                    if let Err(e) = export::save_pdf(&self.pages, &path, self.export_dpi) {
                        log::error!("Failed to save PDF to {}: {e}", path.display());
                    }
                }
            }
            Action::ExportPagePng => {
                let default = export::default_filename("png");
                if let Some(path) = dialogs.save_path(&default) {
                    if let Err(e) = export::write_page_png(self.pages.current(), &path) {
                        log::error!("Failed to export PNG to {}: {e}", path.display());
                    }
                }
            }
            Action::OpenImage => {
                if let Some(path) = dialogs.open_path() {
                    self.cancel_gesture(display);
                    let loaded = Page::from_image_file(
                        &path,
                        self.pages.width(),
                        self.pages.height(),
                        self.pages.background(),
                    );
                    match loaded {
                        Ok(page) => {
                            self.pages.replace_current(page);
                            display.refresh_from_page(self.pages.current());
                            log::info!("Opened {} onto the current page", path.display());
                        }
                        Err(e) => log::error!("Failed to open {}: {e}", path.display()),
                    }
                }
            }
            // Exit first cancels whatever is in flight; a second request
            // while idle quits
            Action::Exit => match self.gesture {
                Gesture::Dragging { .. } => self.cancel_gesture(display),
                Gesture::Idle => self.should_exit = true,
            },
        }

        Ok(())
    }
}
