//! Modal placement engine

use crate::constants::StyleConstants;
use crate::style::{FloatStyle, Position};
use perch_geometry::{AnchorPosition, WindowDimensions};

/// Modal variants the engine can lay out. The backdrop-bearing variant is
/// handled by a separate component and never reaches this engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVariant {
    #[default]
    Popover,
}

/// Window measurements the engine lays out against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSpec {
    pub window: WindowDimensions,
    pub is_small_screen_width: bool,
}

impl ViewportSpec {
    pub fn new(window: WindowDimensions) -> Self {
        Self {
            window,
            is_small_screen_width: false,
        }
    }
}

/// Output of [`compute_modal_style`].
///
/// The edge flags report how safe-area space should be applied per vertical
/// edge, derived from the final merged container style: a non-zero margin on
/// an edge selects margin adjustment, otherwise a non-zero padding selects
/// padding adjustment, otherwise the edge gets none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputedModalStyle {
    pub outer: FloatStyle,
    pub container: FloatStyle,
    pub should_add_top_safe_area_margin: bool,
    pub should_add_bottom_safe_area_margin: bool,
    pub should_add_top_safe_area_padding: bool,
    pub should_add_bottom_safe_area_padding: bool,
}

/// Computes the outer placement and container style for a modal.
///
/// Pure function of its inputs: no hidden state is read or mutated, and
/// identical inputs always yield identical output.
///
/// Container precedence, lowest to highest: viewport-computed defaults,
/// variant base, caller override. Placement puts the popover adjacent to the
/// anchor, flips to the opposite side of the anchor on an axis where the
/// naive placement would overflow the window, and clamps the result into the
/// window bounds. An exact fit stays on the anchor-relative side.
pub fn compute_modal_style(
    constants: &StyleConstants,
    variant: ModalVariant,
    viewport: ViewportSpec,
    anchor: AnchorPosition,
    inner_container_override: &FloatStyle,
    outer_override: &FloatStyle,
) -> ComputedModalStyle {
    let base = match variant {
        ModalVariant::Popover => constants.popover_base,
    };
    let defaults = if viewport.is_small_screen_width {
        FloatStyle::new().width(viewport.window.width)
    } else {
        FloatStyle::new()
    };
    let container = inner_container_override.merged_over(&base.merged_over(&defaults));

    let width = container.width.unwrap_or(0.0);
    let height = container.height.unwrap_or(0.0);
    let left = resolve_axis(
        anchor.left,
        anchor.right,
        width,
        viewport.window.width,
    );
    let top = resolve_axis(
        anchor.top,
        anchor.bottom,
        height,
        viewport.window.height,
    );

    let outer = outer_override.merged_over(
        &FloatStyle::new()
            .position(Position::Absolute)
            .top(top)
            .left(left)
            .z_index(constants.overlay_z_index),
    );

    let margin_top = container.margin_top.unwrap_or(0.0);
    let margin_bottom = container.margin_bottom.unwrap_or(0.0);
    let padding_top = container.padding_top.unwrap_or(0.0);
    let padding_bottom = container.padding_bottom.unwrap_or(0.0);
    let should_add_top_safe_area_margin = margin_top > 0.0;
    let should_add_bottom_safe_area_margin = margin_bottom > 0.0;

    ComputedModalStyle {
        outer,
        container,
        should_add_top_safe_area_margin,
        should_add_bottom_safe_area_margin,
        should_add_top_safe_area_padding: !should_add_top_safe_area_margin && padding_top > 0.0,
        should_add_bottom_safe_area_padding: !should_add_bottom_safe_area_margin
            && padding_bottom > 0.0,
    }
}

/// Resolves one placement axis from the anchor's leading/trailing offsets.
///
/// `leading` anchors the popover's leading edge at that offset, growing
/// toward the trailing edge; `trailing` anchors its trailing edge at that
/// offset from the window's trailing edge, growing backward. Whichever is
/// set drives the naive placement; overflow flips to the opposite side of
/// the anchor, and the result is clamped into `[0, limit - extent]`.
fn resolve_axis(leading: Option<f32>, trailing: Option<f32>, extent: f32, limit: f32) -> f32 {
    let naive = if let Some(offset) = leading {
        if offset + extent > limit {
            offset - extent
        } else {
            offset
        }
    } else if let Some(offset) = trailing {
        let flush = limit - offset - extent;
        if flush < 0.0 {
            limit - offset
        } else {
            flush
        }
    } else {
        0.0
    };
    naive.clamp(0.0, (limit - extent).max(0.0))
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
