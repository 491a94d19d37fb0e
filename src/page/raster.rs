//! A single raster page backed by a Cairo image surface.

use std::fs::File;
use std::path::Path;

use cairo::{Format, ImageSurface};
use image::imageops::FilterType;
use thiserror::Error;

use crate::draw::Color;

/// Errors raised while creating, painting, or exporting a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Cairo drawing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Page pixels are borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-size raster surface holding one page of the whiteboard.
///
/// The page owns its pixel memory through a Cairo `Rgb24` image surface.
/// Drawing happens through short-lived contexts vended by [`Page::painter`];
/// contexts must not be held across calls to [`Page::pixels`], which needs
/// exclusive access to the pixel data.
pub struct Page {
    surface: ImageSurface,
    width: i32,
    height: i32,
    background: Color,
}

impl Page {
    /// Creates a blank page filled with the background color.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, PageError> {
        let surface = ImageSurface::create(Format::Rgb24, width, height)?;
        let page = Self {
            surface,
            width,
            height,
            background,
        };
        page.fill_background()?;
        Ok(page)
    }

    /// Loads an image file into a new page, stretching it to the page size.
    ///
    /// The stretch ignores aspect ratio. An image whose dimensions already
    /// match is copied pixel-for-pixel without resampling.
    pub fn from_image_file(
        path: &Path,
        width: i32,
        height: i32,
        background: Color,
    ) -> Result<Self, PageError> {
        let decoded = image::open(path)?;
        let sized = if decoded.width() == width as u32 && decoded.height() == height as u32 {
            decoded
        } else {
            decoded.resize_exact(width as u32, height as u32, FilterType::Lanczos3)
        };
        let rgb = sized.into_rgb8();

        let mut page = Page::new(width, height, background)?;
        {
            let stride = page.surface.stride() as usize;
            let mut data = page.surface.data()?;
            for (y, row) in rgb.rows().enumerate() {
                let mut offset = y * stride;
                for pixel in row {
                    let [r, g, b] = pixel.0;
                    let value = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
                    data[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
                    offset += 4;
                }
            }
        }
        page.surface.mark_dirty();
        Ok(page)
    }

    fn fill_background(&self) -> Result<(), PageError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_source_rgba(
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        );
        ctx.paint()?;
        Ok(())
    }

    /// Returns a fresh drawing context targeting this page.
    ///
    /// Callers draw through the context and drop it; each context holds a
    /// reference to the surface while alive.
    pub fn painter(&self) -> Result<cairo::Context, PageError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Resets the page to its blank background.
    pub fn clear(&mut self) -> Result<(), PageError> {
        self.fill_background()
    }

    /// Paints another page's content over this one.
    pub fn copy_from(&mut self, other: &Page) -> Result<(), PageError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_source_surface(&other.surface, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Snapshots the page as packed `0RGB` pixels, row-major.
    ///
    /// The high byte of each value is zeroed; `Rgb24` leaves it undefined.
    /// Requires that no drawing context for this page is alive.
    pub fn pixels(&mut self) -> Result<Vec<u32>, PageError> {
        self.surface.flush();
        let width = self.width as usize;
        let height = self.height as usize;
        let stride = self.surface.stride() as usize;

        let data = self.surface.data()?;
        let mut out = Vec::with_capacity(width * height);
        for y in 0..height {
            let row = &data[y * stride..y * stride + width * 4];
            for px in row.chunks_exact(4) {
                let value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                out.push(value & 0x00FF_FFFF);
            }
        }
        Ok(out)
    }

    /// Writes the page to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), PageError> {
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }

    /// Borrows the underlying surface, e.g. as a paint source.
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn new_page_is_filled_with_background() {
        let mut page = Page::new(4, 3, WHITE).unwrap();
        let pixels = page.pixels().unwrap();
        assert_eq!(pixels.len(), 12);
        assert!(pixels.iter().all(|&px| px == 0x00FF_FFFF));
    }

    #[test]
    fn clear_resets_drawn_content() {
        let mut page = Page::new(8, 8, WHITE).unwrap();
        {
            let ctx = page.painter().unwrap();
            ctx.set_source_rgba(BLACK.r, BLACK.g, BLACK.b, BLACK.a);
            ctx.paint().unwrap();
        }
        assert!(page.pixels().unwrap().iter().all(|&px| px == 0));

        page.clear().unwrap();
        assert!(page.pixels().unwrap().iter().all(|&px| px == 0x00FF_FFFF));
    }

    #[test]
    fn copy_from_duplicates_pixels() {
        let mut source = Page::new(6, 6, WHITE).unwrap();
        {
            let ctx = source.painter().unwrap();
            ctx.set_source_rgb(1.0, 0.0, 0.0);
            ctx.rectangle(0.0, 0.0, 3.0, 6.0);
            ctx.fill().unwrap();
        }

        let mut copy = Page::new(6, 6, BLACK).unwrap();
        copy.copy_from(&source).unwrap();
        assert_eq!(copy.pixels().unwrap(), source.pixels().unwrap());
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");

        let mut page = Page::new(16, 12, WHITE).unwrap();
        {
            let ctx = page.painter().unwrap();
            ctx.set_source_rgb(0.0, 0.0, 1.0);
            ctx.rectangle(2.0, 2.0, 8.0, 5.0);
            ctx.fill().unwrap();
        }
        page.write_png(&path).unwrap();

        let mut reloaded = Page::from_image_file(&path, 16, 12, WHITE).unwrap();
        assert_eq!(reloaded.pixels().unwrap(), page.pixels().unwrap());
    }

    #[test]
    fn image_load_stretches_to_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");

        // 2x2 source, loaded onto a larger page.
        let small = Page::new(2, 2, BLACK).unwrap();
        small.write_png(&path).unwrap();

        let mut page = Page::from_image_file(&path, 8, 4, WHITE).unwrap();
        assert_eq!(page.width(), 8);
        assert_eq!(page.height(), 4);
        assert!(page.pixels().unwrap().iter().all(|&px| px == 0));
    }

    #[test]
    fn missing_image_file_is_an_error() {
        let result = Page::from_image_file(Path::new("/nonexistent/board.png"), 4, 4, WHITE);
        assert!(matches!(result, Err(PageError::Image(_))));
    }
}
