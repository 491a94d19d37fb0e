//! Generic input event types for cross-backend compatibility.

/// Pointer button identification.
///
/// Backend implementations map their native button codes to these generic
/// values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button (primary drawing button)
    Left,
    /// Right button (currently unused)
    Right,
    /// Middle button (currently unused)
    Middle,
}
