//! Anchor element position

/// Screen-space offsets describing where the anchor element sits, so a
/// popover can be placed adjacent to it.
///
/// Each edge is optional; a popover is typically anchored with a `top`/`left`
/// pair or a `bottom`/`right` pair. Immutable per render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorPosition {
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl AnchorPosition {
    pub fn new() -> Self {
        Self::default()
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

    /// Returns true if no edge offset is set.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.right.is_none() && self.bottom.is_none()
    }
}
