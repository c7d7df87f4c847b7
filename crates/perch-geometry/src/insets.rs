//! Edge insets and safe-area derivation

/// Per-edge inset values for a rectangle.
///
/// Used both for device safe-area insets (notches, home indicators) and for
/// padding values derived from them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Splits device safe-area insets into per-edge padding candidates.
///
/// Pure pass-through derivation; insets are non-negative by contract of the
/// measurement collaborator, so no clamping is applied here.
pub fn safe_area_padding(insets: EdgeInsets) -> EdgeInsets {
    EdgeInsets {
        left: insets.left,
        top: insets.top,
        right: insets.right,
        bottom: insets.bottom,
    }
}

#[cfg(test)]
#[path = "tests/insets_tests.rs"]
mod tests;
