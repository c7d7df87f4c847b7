use super::{compute_modal_style, ModalVariant, ViewportSpec};
use crate::{FloatStyle, Position, StyleConstants};
use perch_geometry::{AnchorPosition, WindowDimensions};

fn viewport(width: f32, height: f32) -> ViewportSpec {
    ViewportSpec::new(WindowDimensions::new(width, height))
}

fn compute(
    viewport: ViewportSpec,
    anchor: AnchorPosition,
    inner: FloatStyle,
    outer: FloatStyle,
) -> super::ComputedModalStyle {
    compute_modal_style(
        &StyleConstants::default(),
        ModalVariant::Popover,
        viewport,
        anchor,
        &inner,
        &outer,
    )
}

#[test]
fn placement_stays_below_anchor_when_it_fits() {
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().top(100.0).left(50.0),
        FloatStyle::new().width(200.0).height(300.0),
        FloatStyle::new(),
    );
    // 100 + 300 <= 800, no flip needed.
    assert_eq!(style.outer.top, Some(100.0));
    assert_eq!(style.outer.left, Some(50.0));
}

#[test]
fn placement_flips_above_anchor_on_vertical_overflow() {
    let style = compute(
        viewport(400.0, 300.0),
        AnchorPosition::new().top(100.0).left(50.0),
        FloatStyle::new().width(200.0).height(300.0),
        FloatStyle::new(),
    );
    // 100 + 300 > 300: place above the anchor, then clamp into the window.
    assert_eq!(style.outer.top, Some(0.0));
    assert_eq!(style.outer.left, Some(50.0));
}

#[test]
fn exact_fit_does_not_flip() {
    let style = compute(
        viewport(400.0, 400.0),
        AnchorPosition::new().top(100.0).left(50.0),
        FloatStyle::new().width(200.0).height(300.0),
        FloatStyle::new(),
    );
    assert_eq!(style.outer.top, Some(100.0));
}

#[test]
fn trailing_anchor_grows_away_from_the_window_edge() {
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().bottom(40.0).right(10.0),
        FloatStyle::new().width(100.0).height(200.0),
        FloatStyle::new(),
    );
    // Popover sits flush above the bottom offset and left of the right one.
    assert_eq!(style.outer.top, Some(800.0 - 40.0 - 200.0));
    assert_eq!(style.outer.left, Some(400.0 - 10.0 - 100.0));
}

#[test]
fn output_is_idempotent_for_fixed_inputs() {
    let anchor = AnchorPosition::new().top(64.0).left(16.0);
    let inner = FloatStyle::new().width(240.0).height(180.0).padding_top(8.0);
    let outer = FloatStyle::new().z_index(7.0);
    let first = compute(viewport(390.0, 844.0), anchor, inner, outer);
    let second = compute(viewport(390.0, 844.0), anchor, inner, outer);
    assert_eq!(first, second);
}

#[test]
fn placement_is_always_within_window_bounds() {
    let windows = [(400.0, 800.0), (320.0, 480.0), (1024.0, 768.0)];
    let offsets = [-50.0, 0.0, 100.0, 460.0, 900.0];
    for (window_width, window_height) in windows {
        for top in offsets {
            for left in offsets {
                let style = compute(
                    viewport(window_width, window_height),
                    AnchorPosition::new().top(top).left(left),
                    FloatStyle::new().width(200.0).height(300.0),
                    FloatStyle::new(),
                );
                let x = style.outer.left.unwrap();
                let y = style.outer.top.unwrap();
                assert!(x >= 0.0 && x + 200.0 <= window_width.max(200.0));
                assert!(y >= 0.0 && y + 300.0 <= window_height.max(300.0));
            }
        }
    }
}

#[test]
fn double_overflow_degrades_to_clamped_origin() {
    // Popover larger than the window on both axes still yields a style.
    let style = compute(
        viewport(100.0, 100.0),
        AnchorPosition::new().top(50.0).left(50.0),
        FloatStyle::new().width(200.0).height(300.0),
        FloatStyle::new(),
    );
    assert_eq!(style.outer.top, Some(0.0));
    assert_eq!(style.outer.left, Some(0.0));
}

#[test]
fn outer_carries_fixed_stacking_order() {
    let constants = StyleConstants::default();
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().top(10.0).left(10.0),
        FloatStyle::new(),
        FloatStyle::new(),
    );
    assert_eq!(style.outer.position, Some(Position::Absolute));
    assert_eq!(style.outer.z_index, Some(constants.overlay_z_index));
}

#[test]
fn edge_flags_read_the_final_merged_container() {
    // Override adds a bottom margin: margin wins on that edge even though
    // the same override sets a bottom padding.
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().top(10.0).left(10.0),
        FloatStyle::new().margin_bottom(12.0).padding_bottom(6.0).padding_top(4.0),
        FloatStyle::new(),
    );
    assert!(style.should_add_bottom_safe_area_margin);
    assert!(!style.should_add_bottom_safe_area_padding);
    assert!(!style.should_add_top_safe_area_margin);
    assert!(style.should_add_top_safe_area_padding);
}

#[test]
fn edge_without_margin_or_padding_gets_no_flag() {
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().top(10.0).left(10.0),
        FloatStyle::new(),
        FloatStyle::new(),
    );
    assert!(!style.should_add_top_safe_area_margin);
    assert!(!style.should_add_top_safe_area_padding);
    assert!(!style.should_add_bottom_safe_area_margin);
    assert!(!style.should_add_bottom_safe_area_padding);
}

#[test]
fn override_wins_over_variant_base() {
    let constants = StyleConstants::default();
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new().top(10.0).left(10.0),
        FloatStyle::new().width(111.0),
        FloatStyle::new(),
    );
    assert_eq!(style.container.width, Some(111.0));
    assert_eq!(style.container.height, constants.popover_base.height);
}

#[test]
fn small_screen_defaults_span_the_window_width() {
    let mut viewport = viewport(320.0, 480.0);
    viewport.is_small_screen_width = true;
    let style = compute_modal_style(
        &StyleConstants {
            popover_base: FloatStyle::new().height(240.0),
            ..StyleConstants::default()
        },
        ModalVariant::Popover,
        viewport,
        AnchorPosition::new().top(10.0).left(0.0),
        &FloatStyle::new(),
        &FloatStyle::new(),
    );
    assert_eq!(style.container.width, Some(320.0));
}

#[test]
fn empty_anchor_falls_back_to_the_window_origin() {
    let style = compute(
        viewport(400.0, 800.0),
        AnchorPosition::new(),
        FloatStyle::new().width(100.0).height(100.0),
        FloatStyle::new(),
    );
    assert_eq!(style.outer.top, Some(0.0));
    assert_eq!(style.outer.left, Some(0.0));
}
