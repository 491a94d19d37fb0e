use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::input::BoardState;
use crate::page::Page;

pub mod window;

/// Runs the windowed board with full event loop.
///
/// # Arguments
/// * `open` - Optional image file loaded onto the first page before the
///   window appears
pub fn run(config: &Config, open: Option<&Path>) -> Result<()> {
    let mut state = BoardState::new(config).context("Failed to set up the first page")?;

    if let Some(path) = open {
        let page = Page::from_image_file(
            path,
            state.pages.width(),
            state.pages.height(),
            state.pages.background(),
        )
        .with_context(|| format!("Failed to open {}", path.display()))?;
        state.pages.replace_current(page);
        info!("Opened {} onto the first page", path.display());
    }

    let mut backend = window::WindowBackend::new(
        state.pages.width(),
        state.pages.height(),
        state.pages.background(),
    )?;
    backend.run(&mut state)
}
