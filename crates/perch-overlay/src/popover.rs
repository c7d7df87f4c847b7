//! Anchored popover without a backdrop

use crate::channel::PopoverChannel;
use crate::dismiss_stack::DismissStack;
use crate::handle::{AnchorId, SurfaceId};
use crate::lifecycle::{PopoverLifecycle, PopoverSession};
use perch_geometry::{
    modal_padding, safe_area_padding, AnchorPosition, EdgeInsets, ModalPaddingParams,
    PaddingAdjustment, WindowDimensions,
};
use perch_layout::{compute_modal_style, FloatStyle, ModalVariant, StyleConstants, ViewportSpec};
use std::rc::Rc;

/// Measurement and style collaborators consumed at render time.
///
/// Implementations return the latest value synchronously; the popover never
/// caches them across renders, so rotation or inset changes are picked up on
/// the next render.
pub trait PopoverEnv {
    fn window_dimensions(&self) -> WindowDimensions;
    fn safe_area_insets(&self) -> EdgeInsets;
    fn style_constants(&self) -> StyleConstants;

    fn is_small_screen_width(&self) -> bool {
        false
    }
}

/// Caller-facing configuration for a [`Popover`].
#[derive(Clone)]
pub struct PopoverSpec {
    pub anchor_position: AnchorPosition,
    pub inner_container_style: FloatStyle,
    pub outer_style: FloatStyle,
    pub anchor: Option<AnchorId>,
    pub surface: Option<SurfaceId>,
    on_show: Rc<dyn Fn()>,
    on_hide: Rc<dyn Fn()>,
    on_close: Rc<dyn Fn(Option<AnchorId>)>,
}

impl Default for PopoverSpec {
    fn default() -> Self {
        Self {
            anchor_position: AnchorPosition::default(),
            inner_container_style: FloatStyle::default(),
            outer_style: FloatStyle::default(),
            anchor: None,
            surface: None,
            on_show: Rc::new(|| {}),
            on_hide: Rc::new(|| {}),
            on_close: Rc::new(|_| {}),
        }
    }
}

impl PopoverSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor_position(mut self, anchor_position: AnchorPosition) -> Self {
        self.anchor_position = anchor_position;
        self
    }

    pub fn inner_container_style(mut self, style: FloatStyle) -> Self {
        self.inner_container_style = style;
        self
    }

    pub fn outer_style(mut self, style: FloatStyle) -> Self {
        self.outer_style = style;
        self
    }

    pub fn anchor(mut self, anchor: AnchorId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn surface(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn on_show(mut self, on_show: impl Fn() + 'static) -> Self {
        self.on_show = Rc::new(on_show);
        self
    }

    pub fn on_hide(mut self, on_hide: impl Fn() + 'static) -> Self {
        self.on_hide = Rc::new(on_hide);
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(Option<AnchorId>) + 'static) -> Self {
        self.on_close = Rc::new(on_close);
        self
    }
}

/// What a render produces when the popover is visible: the final styles for
/// the outer positioned box and its inner container, plus the surface handle
/// the positioned-box primitive renders into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoverFrame {
    pub surface: Option<SurfaceId>,
    pub outer: FloatStyle,
    pub container: FloatStyle,
}

/// An anchor-relative overlay panel with no backdrop.
///
/// Each render recomputes placement from the current window dimensions and
/// safe-area insets, and feeds the visible flag through an edge-detecting
/// lifecycle that keeps the [`PopoverChannel`] and [`DismissStack`] in sync.
pub struct Popover {
    session: PopoverSession,
    anchor_position: AnchorPosition,
    inner_container_style: FloatStyle,
    outer_style: FloatStyle,
    lifecycle: PopoverLifecycle,
    padding_memo: Option<(ModalPaddingParams, PaddingAdjustment)>,
}

impl Popover {
    pub fn new(channel: PopoverChannel, stack: DismissStack, spec: PopoverSpec) -> Self {
        let mut session = PopoverSession::new(channel, stack);
        session.anchor = spec.anchor;
        session.surface = spec.surface;
        session.on_show = spec.on_show;
        session.on_hide = spec.on_hide;
        session.on_close = spec.on_close;
        Self {
            session,
            anchor_position: spec.anchor_position,
            inner_container_style: spec.inner_container_style,
            outer_style: spec.outer_style,
            lifecycle: PopoverLifecycle::new(),
            padding_memo: None,
        }
    }

    /// Moves the popover to a new anchor position; picked up on the next
    /// render.
    pub fn set_anchor_position(&mut self, anchor_position: AnchorPosition) {
        self.anchor_position = anchor_position;
    }

    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    /// Computes this render's styles and drives the visibility lifecycle.
    ///
    /// Returns `None` while hidden. Lifecycle side effects fire only on
    /// edges of `visible`, so calling this repeatedly with an unchanged flag
    /// is free of side effects.
    pub fn render(&mut self, env: &dyn PopoverEnv, visible: bool) -> Option<PopoverFrame> {
        let constants = env.style_constants();
        let viewport = ViewportSpec {
            window: env.window_dimensions(),
            is_small_screen_width: env.is_small_screen_width(),
        };
        let computed = compute_modal_style(
            &constants,
            ModalVariant::Popover,
            viewport,
            self.anchor_position,
            &self.inner_container_style,
            &self.outer_style,
        );

        let params = ModalPaddingParams {
            safe_area: safe_area_padding(env.safe_area_insets()),
            add_top_margin: computed.should_add_top_safe_area_margin,
            add_bottom_margin: computed.should_add_bottom_safe_area_margin,
            add_top_padding: computed.should_add_top_safe_area_padding,
            add_bottom_padding: computed.should_add_bottom_safe_area_padding,
            container_margin_top: computed.container.margin_top.unwrap_or(0.0),
            container_margin_bottom: computed.container.margin_bottom.unwrap_or(0.0),
            container_padding_top: computed.container.padding_top.unwrap_or(0.0),
            container_padding_bottom: computed.container.padding_bottom.unwrap_or(0.0),
        };
        let adjustment = self.padding_for(params);

        self.lifecycle.sync(visible, &self.session);
        if !visible {
            return None;
        }

        // Container layering mirrors the host view tree: variant-independent
        // defaults under the computed container, safe-area adjustment on top.
        let container = adjustment_style(&adjustment)
            .merged_over(&computed.container.merged_over(&constants.default_modal_container));
        Some(PopoverFrame {
            surface: self.session.surface,
            outer: computed.outer,
            container,
        })
    }

    /// Releases registry state. Must be called when the popover leaves the
    /// tree; dropping the popover does the same.
    pub fn unmount(&mut self) {
        self.lifecycle.teardown();
    }

    fn padding_for(&mut self, params: ModalPaddingParams) -> PaddingAdjustment {
        match self.padding_memo {
            Some((cached_params, cached)) if cached_params == params => cached,
            _ => {
                let adjustment = modal_padding(&params);
                self.padding_memo = Some((params, adjustment));
                adjustment
            }
        }
    }
}

impl Drop for Popover {
    fn drop(&mut self) {
        self.lifecycle.teardown();
    }
}

fn adjustment_style(adjustment: &PaddingAdjustment) -> FloatStyle {
    let mut style = FloatStyle::new()
        .padding_top(adjustment.padding_top)
        .padding_bottom(adjustment.padding_bottom)
        .padding_left(adjustment.padding_left)
        .padding_right(adjustment.padding_right);
    if let Some(margin) = adjustment.margin_top {
        style = style.margin_top(margin);
    }
    if let Some(margin) = adjustment.margin_bottom {
        style = style.margin_bottom(margin);
    }
    style
}
