//! Style constants consumed by the layout engine

use crate::style::FloatStyle;

/// Style-constant lookup for modal layout.
///
/// Stands in for the host's theme provider: a pure bundle of style values
/// with no side effects. Color constants are out of scope here; only the
/// geometry-bearing pieces the engine reads are carried.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConstants {
    /// Variant-independent base applied under every modal container.
    pub default_modal_container: FloatStyle,
    /// Base style for the popover variant, including its default surface
    /// dimensions.
    pub popover_base: FloatStyle,
    /// Fixed stacking order for the outer positioned box. Constant, never
    /// derived from the anchor.
    pub overlay_z_index: f32,
}

impl StyleConstants {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for StyleConstants {
    fn default() -> Self {
        Self {
            default_modal_container: FloatStyle::new(),
            popover_base: FloatStyle::new().width(375.0).height(240.0),
            overlay_z_index: 1.0,
        }
    }
}
