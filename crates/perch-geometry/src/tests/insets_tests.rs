use super::{safe_area_padding, EdgeInsets};

#[test]
fn safe_area_padding_passes_insets_through() {
    let insets = EdgeInsets::from_components(4.0, 44.0, 4.0, 34.0);
    let padding = safe_area_padding(insets);
    assert_eq!(padding, insets);
}

#[test]
fn zero_insets_produce_zero_padding() {
    assert_eq!(safe_area_padding(EdgeInsets::ZERO), EdgeInsets::ZERO);
}

#[test]
fn uniform_sets_every_edge() {
    let insets = EdgeInsets::uniform(8.0);
    assert_eq!(insets.left, 8.0);
    assert_eq!(insets.top, 8.0);
    assert_eq!(insets.right, 8.0);
    assert_eq!(insets.bottom, 8.0);
}
