// minifb window backend driving the shared board core
use anyhow::{Context, Result};
use log::{error, info, warn};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::dialog::StdioDialogs;
use crate::display::DisplaySurface;
use crate::draw::{Color, Mark, ShapeKind, render_mark};
use crate::input::{Action, BoardState, PointerButton, Tool};
use crate::page::Page;

/// Key bindings for the menu actions.
///
/// Tool keys are mnemonic where a letter is free; the digit keys follow the
/// side count (3, 5, 6) and the star sits on its shifted key (8).
const KEY_ACTIONS: &[(Key, Action)] = &[
    (Key::P, Action::SetTool(Tool::Pen)),
    (Key::E, Action::SetTool(Tool::Eraser)),
    (Key::T, Action::SetTool(Tool::Text)),
    (Key::R, Action::SetTool(Tool::Shape(ShapeKind::Rectangle))),
    (Key::C, Action::SetTool(Tool::Shape(ShapeKind::Circle))),
    (Key::L, Action::SetTool(Tool::Shape(ShapeKind::Line))),
    (Key::B, Action::SetTool(Tool::Shape(ShapeKind::Cube))),
    (Key::Key3, Action::SetTool(Tool::Shape(ShapeKind::Triangle))),
    (Key::Key5, Action::SetTool(Tool::Shape(ShapeKind::Pentagon))),
    (Key::Key6, Action::SetTool(Tool::Shape(ShapeKind::Hexagon))),
    (Key::Key8, Action::SetTool(Tool::Shape(ShapeKind::Star))),
    (Key::F2, Action::PickColor),
    (Key::F3, Action::SetStrokeWidth),
    (Key::F4, Action::SetFontSize),
    (Key::F5, Action::SetFontStyle),
    (Key::X, Action::ClearPage),
    (Key::Right, Action::NextPage),
    (Key::PageDown, Action::NextPage),
    (Key::Left, Action::PreviousPage),
    (Key::PageUp, Action::PreviousPage),
    (Key::S, Action::SaveDocument),
    (Key::G, Action::ExportPagePng),
    (Key::I, Action::OpenImage),
    (Key::Q, Action::Exit),
    (Key::Escape, Action::Exit),
];

const POINTER_BUTTONS: &[(MouseButton, PointerButton)] = &[
    (MouseButton::Left, PointerButton::Left),
    (MouseButton::Right, PointerButton::Right),
    (MouseButton::Middle, PointerButton::Middle),
];

/// Desktop window showing the current page with live marks and the shape
/// preview composited on top.
pub struct WindowBackend {
    window: Window,

    /// Mirror of the current page plus every committed live mark
    screen: Page,
    /// Composition target for frames that carry a preview
    scratch: Page,
    preview: Option<Mark>,

    dirty: bool,
}

impl WindowBackend {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let mut window = Window::new(
            "Inkboard",
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .context("Failed to open the drawing window")?;
        window.set_target_fps(60);

        Ok(Self {
            window,
            screen: Page::new(width, height, background)?,
            scratch: Page::new(width, height, background)?,
            preview: None,
            dirty: true,
        })
    }

    /// Runs the event loop until the window closes or the state asks to
    /// exit.
    ///
    /// Pointer state is polled once per frame and turned into
    /// press/motion/release edges; key presses map through [`KEY_ACTIONS`].
    /// Dialogs block the loop on the controlling terminal while they wait
    /// for a reply.
    pub fn run(&mut self, state: &mut BoardState) -> Result<()> {
        let dialogs = StdioDialogs;
        let mut was_down = [false; 3];
        let mut last_pos = (-1.0f32, -1.0f32);
        let mut shown_page = (usize::MAX, 0);

        self.refresh_from_page(state.pages.current());

        while self.window.is_open() && !state.should_exit {
            let mut pressed = Vec::new();
            for (key, action) in KEY_ACTIONS {
                if self.window.is_key_pressed(*key, KeyRepeat::No) {
                    pressed.push(*action);
                }
            }
            // Board failures are reported and the window keeps running; only
            // a presentation failure below takes the process down
            for action in pressed {
                if let Err(err) = state.handle_action(self, &dialogs, action) {
                    error!("{action:?} failed: {err}");
                }
            }

            if let Some(pos) = self.window.get_mouse_pos(MouseMode::Clamp) {
                let (x, y) = (f64::from(pos.0), f64::from(pos.1));
                let left_held = was_down[0];
                for (i, (button, kind)) in POINTER_BUTTONS.iter().enumerate() {
                    let down = self.window.get_mouse_down(*button);
                    let result = if down && !was_down[i] {
                        state.on_pointer_press(self, &dialogs, *kind, x, y)
                    } else if !down && was_down[i] {
                        state.on_pointer_release(self, *kind, x, y)
                    } else {
                        Ok(())
                    };
                    if let Err(err) = result {
                        error!("Pointer commit failed: {err}");
                    }
                    was_down[i] = down;
                }
                // Motion only matters to the left-button gesture, and never on
                // the press frame itself
                if was_down[0] && left_held && pos != last_pos {
                    if let Err(err) = state.on_pointer_motion(self, x, y) {
                        error!("Stroke commit failed: {err}");
                    }
                }
                last_pos = pos;
            }

            let page = (state.pages.index(), state.pages.page_count());
            if page != shown_page {
                self.window
                    .set_title(&format!("Inkboard (page {}/{})", page.0 + 1, page.1));
                shown_page = page;
            }

            self.present()?;
        }

        info!("Window closed");
        Ok(())
    }

    /// Pushes the composited framebuffer to the window.
    ///
    /// Recomposites only when something changed since the last frame; the
    /// window is still polled every frame so input keeps flowing.
    fn present(&mut self) -> Result<()> {
        if !self.dirty {
            self.window.update();
            return Ok(());
        }
        self.dirty = false;

        let width = self.screen.width() as usize;
        let height = self.screen.height() as usize;
        let buffer = match &self.preview {
            Some(mark) => {
                self.scratch.copy_from(&self.screen)?;
                {
                    let ctx = self.scratch.painter()?;
                    render_mark(&ctx, mark);
                }
                self.scratch.pixels()?
            }
            None => self.screen.pixels()?,
        };
        self.window
            .update_with_buffer(&buffer, width, height)
            .context("Failed to present the framebuffer")?;
        Ok(())
    }
}

impl DisplaySurface for WindowBackend {
    fn draw_mark(&mut self, mark: &Mark) {
        match self.screen.painter() {
            Ok(ctx) => {
                render_mark(&ctx, mark);
                self.dirty = true;
            }
            // The page keeps the authoritative pixels; the next refresh
            // repairs the mirror
            Err(err) => warn!("Dropped a live mark: {err}"),
        }
    }

    fn show_preview(&mut self, mark: Mark) {
        self.preview = Some(mark);
        self.dirty = true;
    }

    fn clear_preview(&mut self) {
        if self.preview.take().is_some() {
            self.dirty = true;
        }
    }

    fn refresh_from_page(&mut self, page: &Page) {
        if let Err(err) = self.screen.copy_from(page) {
            warn!("Failed to mirror the page onto the screen: {err}");
        }
        self.preview = None;
        self.dirty = true;
    }
}
