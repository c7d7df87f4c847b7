//! Safe-area padding/margin resolution for modal containers

use crate::insets::EdgeInsets;

/// Inputs for [`modal_padding`].
///
/// `safe_area` is the split produced by [`crate::safe_area_padding`]. The
/// four `add_*` flags are computed by the layout engine from the container's
/// final merged margin/padding values; the `container_*` fields carry those
/// same merged values so additions stack on top of what the container
/// already defines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalPaddingParams {
    pub safe_area: EdgeInsets,
    pub add_top_margin: bool,
    pub add_bottom_margin: bool,
    pub add_top_padding: bool,
    pub add_bottom_padding: bool,
    pub container_margin_top: f32,
    pub container_margin_bottom: f32,
    pub container_padding_top: f32,
    pub container_padding_bottom: f32,
}

/// Final padding/margin values to layer on top of a modal container style.
///
/// Margins are `None` when the edge keeps the container's own margin
/// untouched, so a merge never overwrites it with a computed value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingAdjustment {
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
    pub padding_right: f32,
}

/// Decides, per vertical edge, whether safe-area space is applied as margin
/// (pushing the whole popover away from the screen edge) or as padding
/// (eating into the container's content box).
///
/// An edge receives at most one of the two adjustments; when both flags are
/// set for an edge the margin wins and the padding stays at the container's
/// own value. Left/right insets always land as padding.
pub fn modal_padding(params: &ModalPaddingParams) -> PaddingAdjustment {
    let top_margin = params.add_top_margin;
    let bottom_margin = params.add_bottom_margin;
    let top_padding = params.add_top_padding && !top_margin;
    let bottom_padding = params.add_bottom_padding && !bottom_margin;

    PaddingAdjustment {
        margin_top: top_margin.then(|| params.container_margin_top + params.safe_area.top),
        margin_bottom: bottom_margin.then(|| params.container_margin_bottom + params.safe_area.bottom),
        padding_top: if top_padding {
            params.container_padding_top + params.safe_area.top
        } else {
            params.container_padding_top
        },
        padding_bottom: if bottom_padding {
            params.container_padding_bottom + params.safe_area.bottom
        } else {
            params.container_padding_bottom
        },
        padding_left: params.safe_area.left,
        padding_right: params.safe_area.right,
    }
}

#[cfg(test)]
#[path = "tests/padding_tests.rs"]
mod tests;
