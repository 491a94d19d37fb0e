mod actions;
mod core;
mod pointer;

pub use core::{BoardState, Gesture};
