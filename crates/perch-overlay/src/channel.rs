//! Shared registry for the currently open popover

use crate::handle::{AnchorId, SurfaceId};
use std::cell::RefCell;
use std::rc::Rc;

/// Close callback carried by a registration. Receives the anchor identity
/// being closed so hosts can route the dismissal.
pub type CloseFn = Rc<dyn Fn(Option<AnchorId>)>;

/// Identity a popover registers with the [`PopoverChannel`] while visible.
#[derive(Clone)]
pub struct PopoverRegistration {
    pub surface: Option<SurfaceId>,
    pub anchor: Option<AnchorId>,
    pub close: CloseFn,
}

/// Tracks at most one currently open popover across sibling instances.
///
/// The channel is an explicitly passed coordination object: the nearest
/// common ancestor scope creates it and hands clones to every descendant
/// popover. It tracks identity only and never owns lifecycle; replacing a
/// registration does not close the popover it displaces.
#[derive(Clone, Default)]
pub struct PopoverChannel {
    active: Rc<RefCell<Option<PopoverRegistration>>>,
}

impl PopoverChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `registration` as the active popover, replacing any prior
    /// registration (last open wins). A registration without an anchor
    /// identity can never be matched by a close, so it is ignored.
    pub fn open(&self, registration: PopoverRegistration) {
        if registration.anchor.is_none() {
            log::trace!("ignoring popover registration without an anchor identity");
            return;
        }
        log::trace!("popover channel open for {:?}", registration.anchor);
        *self.active.borrow_mut() = Some(registration);
    }

    /// Clears the registration if the active popover's anchor matches.
    /// Stale or anchor-less closes are silent no-ops.
    pub fn close(&self, anchor: Option<AnchorId>) {
        let Some(anchor) = anchor else {
            return;
        };
        let mut active = self.active.borrow_mut();
        match active.as_ref() {
            Some(registration) if registration.anchor == Some(anchor) => {
                log::trace!("popover channel close for {anchor:?}");
                *active = None;
            }
            _ => log::trace!("stale popover close for {anchor:?} ignored"),
        }
    }

    /// Anchor identity of the active registration, if any.
    pub fn active_anchor(&self) -> Option<AnchorId> {
        self.active.borrow().as_ref().and_then(|r| r.anchor)
    }

    /// Returns true if the active registration belongs to `anchor`.
    pub fn is_open_for(&self, anchor: AnchorId) -> bool {
        self.active_anchor() == Some(anchor)
    }

    /// Invokes the active registration's close callback, if one exists.
    /// Returns whether a popover was asked to close. The registration stays
    /// in place until the popover's own hide path calls [`Self::close`].
    pub fn close_active(&self) -> bool {
        // Clone out of the slot before invoking so the callback can re-enter
        // the channel without a nested borrow.
        let registration = self.active.borrow().clone();
        match registration {
            Some(registration) => {
                (registration.close)(registration.anchor);
                true
            }
            None => false,
        }
    }
}
