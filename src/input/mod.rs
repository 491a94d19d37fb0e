//! Input handling and the board state machine.
//!
//! This module translates backend pointer and keyboard events into marks on
//! the current page. It maintains the selected tool, drawing parameters
//! (color, stroke width, font), the per-gesture drag state, and the handlers
//! for menu actions.

pub mod actions;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use actions::Action;
pub use events::PointerButton;
pub use state::{BoardState, Gesture};
pub use tool::Tool;
