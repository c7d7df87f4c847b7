//! Partial positioning style fragments with explicit merge

/// Positioning scheme for a style fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Absolute,
}

/// A partial absolute-positioning style fragment.
///
/// Every field is optional; unset fields fall through to whatever the
/// fragment is merged over. The layout engine, variant bases, and caller
/// overrides are all expressed as `FloatStyle` values combined with
/// [`FloatStyle::merged_over`], which makes the precedence order explicit
/// instead of relying on spread order at the call site.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatStyle {
    pub position: Option<Position>,
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub z_index: Option<f32>,
}

impl FloatStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn margin_top(mut self, margin: f32) -> Self {
        self.margin_top = Some(margin);
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    pub fn padding_top(mut self, padding: f32) -> Self {
        self.padding_top = Some(padding);
        self
    }

    pub fn padding_bottom(mut self, padding: f32) -> Self {
        self.padding_bottom = Some(padding);
        self
    }

    pub fn padding_left(mut self, padding: f32) -> Self {
        self.padding_left = Some(padding);
        self
    }

    pub fn padding_right(mut self, padding: f32) -> Self {
        self.padding_right = Some(padding);
        self
    }

    pub fn z_index(mut self, z_index: f32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Merges `self` over `base`: set fields of `self` win, unset fields
    /// fall back to `base`. Merging never unsets a field.
    pub fn merged_over(&self, base: &FloatStyle) -> FloatStyle {
        FloatStyle {
            position: self.position.or(base.position),
            top: self.top.or(base.top),
            left: self.left.or(base.left),
            right: self.right.or(base.right),
            bottom: self.bottom.or(base.bottom),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            margin_top: self.margin_top.or(base.margin_top),
            margin_bottom: self.margin_bottom.or(base.margin_bottom),
            padding_top: self.padding_top.or(base.padding_top),
            padding_bottom: self.padding_bottom.or(base.padding_bottom),
            padding_left: self.padding_left.or(base.padding_left),
            padding_right: self.padding_right.or(base.padding_right),
            z_index: self.z_index.or(base.z_index),
        }
    }
}

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
