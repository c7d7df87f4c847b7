//! Screen-space units

/// Current width and height of the hosting window, in logical pixels.
///
/// Supplied by the window-measurement collaborator and may change over the
/// lifetime of a popover (rotation, resize).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WindowDimensions {
    pub width: f32,
    pub height: f32,
}

impl WindowDimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: WindowDimensions = WindowDimensions {
        width: 0.0,
        height: 0.0,
    };
}
