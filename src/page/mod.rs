//! Raster page surfaces and the ordered page list.
//!
//! A whiteboard document is a sequence of fixed-size raster pages. Marks are
//! committed straight into page pixels; the pixels are the document.

pub mod raster;
pub mod store;

pub use raster::{Page, PageError};
pub use store::PageStore;
