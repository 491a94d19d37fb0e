//! Document export: multi-page PDF and single-page PNG.

use std::path::Path;

use chrono::Local;
use thiserror::Error;

use crate::page::{Page, PageError, PageStore};

/// Errors raised while exporting the document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cairo drawing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Page export failed: {0}")]
    Page(#[from] PageError),
}

/// Generate a timestamped default file name with the given extension.
///
/// # Arguments
/// * `extension` - File extension without the dot (e.g., "pdf")
pub fn default_filename(extension: &str) -> String {
    let now = Local::now();
    format!("{}.{}", now.format("whiteboard_%Y-%m-%d_%H%M%S"), extension)
}

/// Writes every page of the store into a single PDF document.
///
/// Pages keep their pixel dimensions but are scaled so that `dpi` pixels
/// cover one inch of paper; at the default 100 dpi a 1600x1200 page becomes
/// 16x12 inches.
pub fn save_pdf(store: &PageStore, path: &Path, dpi: f64) -> Result<(), ExportError> {
    let scale = 72.0 / dpi;
    let width_pt = f64::from(store.width()) * scale;
    let height_pt = f64::from(store.height()) * scale;

    log::info!(
        "Saving {} page(s) to {} at {dpi} dpi",
        store.page_count(),
        path.display()
    );

    let surface = cairo::PdfSurface::new(width_pt, height_pt, path)?;
    surface.set_fallback_resolution(dpi, dpi);
    let ctx = cairo::Context::new(&surface)?;

    for page in store.pages() {
        ctx.save()?;
        ctx.scale(scale, scale);
        ctx.set_source_surface(page.surface(), 0.0, 0.0)?;
        ctx.paint()?;
        ctx.restore()?;
        ctx.show_page()?;
    }

    // The context must go first; it holds a reference to the surface.
    drop(ctx);
    surface.flush();
    surface.finish();
    surface.status()?;

    log::info!("Document saved: {}", path.display());
    Ok(())
}

/// Writes a single page to a PNG file.
pub fn write_page_png(page: &Page, path: &Path) -> Result<(), ExportError> {
    log::info!("Exporting page to {}", path.display());
    page.write_png(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    #[test]
    fn default_filename_is_timestamped() {
        let filename = default_filename("pdf");
        assert!(filename.starts_with("whiteboard_"));
        assert!(filename.ends_with(".pdf"));
        // Check that it contains a valid date (4 digits for year)
        assert!(filename.contains("202"));
    }

    #[test]
    fn save_pdf_writes_a_pdf_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.pdf");

        let mut store = PageStore::new(32, 24, WHITE).unwrap();
        store.advance().unwrap();
        store.advance().unwrap();
        save_pdf(&store, &path, 100.0).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn pdf_export_leaves_pages_usable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.pdf");

        let mut store = PageStore::new(8, 8, WHITE).unwrap();
        save_pdf(&store, &path, 100.0).unwrap();

        // Export must release its surface references so pixel access works.
        assert!(
            store
                .current_mut()
                .pixels()
                .unwrap()
                .iter()
                .all(|&px| px == 0x00FF_FFFF)
        );
    }

    #[test]
    fn write_page_png_produces_a_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");

        let page = Page::new(10, 10, WHITE).unwrap();
        write_page_png(&page, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 10);
        assert_eq!(decoded.height(), 10);
    }
}
