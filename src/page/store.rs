//! Ordered collection of pages with a current-page cursor.

use crate::draw::Color;

use super::raster::{Page, PageError};

/// The document: every page plus the index of the one being edited.
///
/// Pages all share the same dimensions and background color. The store is
/// append-only; pages past the current one are materialized on first visit
/// and never removed.
pub struct PageStore {
    pages: Vec<Page>,
    current: usize,
    width: i32,
    height: i32,
    background: Color,
}

impl PageStore {
    /// Creates a store holding a single blank page.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, PageError> {
        let first = Page::new(width, height, background)?;
        Ok(Self {
            pages: vec![first],
            current: 0,
            width,
            height,
            background,
        })
    }

    /// Moves to the next page, appending one blank page when stepping past
    /// the end.
    ///
    /// The page is created before the cursor moves, so a failed allocation
    /// leaves the store unchanged.
    pub fn advance(&mut self) -> Result<(), PageError> {
        if self.current + 1 >= self.pages.len() {
            let page = Page::new(self.width, self.height, self.background)?;
            self.pages.push(page);
        }
        self.current += 1;
        Ok(())
    }

    /// Moves to the previous page. Returns `false` when already at the first
    /// page.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Clears the current page back to the background color. Other pages are
    /// untouched.
    pub fn clear_current(&mut self) -> Result<(), PageError> {
        self.current_mut().clear()
    }

    /// Swaps in a replacement for the current page.
    pub fn replace_current(&mut self, page: Page) {
        self.pages[self.current] = page;
    }

    pub fn current(&self) -> &Page {
        &self.pages[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Page {
        &mut self.pages[self.current]
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Zero-based index of the current page.
    pub fn index(&self) -> usize {
        self.current
    }

    /// Total number of pages, never less than one.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    fn store() -> PageStore {
        PageStore::new(4, 4, WHITE).unwrap()
    }

    #[test]
    fn starts_with_one_page_at_index_zero() {
        let store = store();
        assert_eq!(store.page_count(), 1);
        assert_eq!(store.index(), 0);
    }

    #[test]
    fn advance_appends_exactly_one_page_at_the_end() {
        let mut store = store();
        store.advance().unwrap();
        assert_eq!(store.page_count(), 2);
        assert_eq!(store.index(), 1);

        store.advance().unwrap();
        assert_eq!(store.page_count(), 3);
        assert_eq!(store.index(), 2);
    }

    #[test]
    fn advance_through_existing_pages_does_not_append() {
        let mut store = store();
        store.advance().unwrap();
        store.advance().unwrap();
        store.retreat();
        store.retreat();
        assert_eq!(store.index(), 0);

        store.advance().unwrap();
        assert_eq!(store.index(), 1);
        assert_eq!(store.page_count(), 3);
    }

    #[test]
    fn retreat_stops_at_the_first_page() {
        let mut store = store();
        assert!(!store.retreat());
        assert_eq!(store.index(), 0);

        store.advance().unwrap();
        assert!(store.retreat());
        assert_eq!(store.index(), 0);
        assert!(!store.retreat());
    }

    #[test]
    fn pages_keep_their_content_across_navigation() {
        let mut store = store();
        {
            let ctx = store.current().painter().unwrap();
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }
        let drawn = store.current_mut().pixels().unwrap();

        store.advance().unwrap();
        let blank = store.current_mut().pixels().unwrap();
        assert!(blank.iter().all(|&px| px == 0x00FF_FFFF));

        store.retreat();
        assert_eq!(store.current_mut().pixels().unwrap(), drawn);
    }

    #[test]
    fn clear_current_leaves_other_pages_alone() {
        let mut store = store();
        {
            let ctx = store.current().painter().unwrap();
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }
        store.advance().unwrap();
        {
            let ctx = store.current().painter().unwrap();
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }

        store.clear_current().unwrap();
        assert!(store.current_mut().pixels().unwrap().iter().all(|&px| px == 0x00FF_FFFF));

        store.retreat();
        assert!(store.current_mut().pixels().unwrap().iter().all(|&px| px == 0));
    }

    #[test]
    fn replace_current_swaps_only_the_cursor_page() {
        let mut store = store();
        store.advance().unwrap();

        let mut replacement = Page::new(4, 4, WHITE).unwrap();
        {
            let ctx = replacement.painter().unwrap();
            ctx.set_source_rgb(1.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }
        store.replace_current(replacement);

        assert_eq!(store.page_count(), 2);
        assert!(store.current_mut().pixels().unwrap().iter().all(|&px| px == 0x00FF_0000));

        store.retreat();
        assert!(store.current_mut().pixels().unwrap().iter().all(|&px| px == 0x00FF_FFFF));
    }
}
