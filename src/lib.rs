//! Library exports for reusing inkboard subsystems.
//!
//! Exposes the board core (geometry, pages, input state) alongside the
//! configuration data structures so tests and external tools can share
//! validation and rendering logic with the main binary.

pub mod config;
pub mod dialog;
pub mod display;
pub mod draw;
pub mod export;
pub mod input;
pub mod page;
pub mod util;

pub use config::Config;
