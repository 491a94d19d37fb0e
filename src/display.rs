//! Display abstraction between the board state and the window backend.

use crate::draw::Mark;
use crate::page::Page;

/// Abstraction over the on-screen rendition of the current page.
///
/// The board state mirrors every committed mark onto the display and parks at
/// most one transient preview above it; the backend composites the two when
/// presenting a frame. Methods are infallible from the caller's perspective:
/// a dropped frame is not actionable, so implementations log their own
/// drawing failures.
pub trait DisplaySurface {
    /// Draws a committed mark onto the displayed page image.
    fn draw_mark(&mut self, mark: &Mark);

    /// Replaces the transient preview shown above the page content.
    fn show_preview(&mut self, mark: Mark);

    /// Removes the transient preview, if any.
    fn clear_preview(&mut self);

    /// Discards the displayed image and redraws it from the given page.
    fn refresh_from_page(&mut self, page: &Page);
}
