//! Visibility edge detection and registry bookkeeping

use crate::channel::{CloseFn, PopoverChannel, PopoverRegistration};
use crate::dismiss_stack::{DismissRegistration, DismissStack};
use crate::handle::{AnchorId, SurfaceId};
use std::rc::Rc;

/// Everything a popover's lifecycle transitions need: the two registries,
/// the popover's handles, and the host callbacks.
#[derive(Clone)]
pub struct PopoverSession {
    pub channel: PopoverChannel,
    pub stack: DismissStack,
    pub anchor: Option<AnchorId>,
    pub surface: Option<SurfaceId>,
    pub on_show: Rc<dyn Fn()>,
    pub on_hide: Rc<dyn Fn()>,
    pub on_close: CloseFn,
}

impl PopoverSession {
    pub fn new(channel: PopoverChannel, stack: DismissStack) -> Self {
        Self {
            channel,
            stack,
            anchor: None,
            surface: None,
            on_show: Rc::new(|| {}),
            on_hide: Rc::new(|| {}),
            on_close: Rc::new(|_| {}),
        }
    }
}

/// Explicit edge detector for the popover's visible flag.
///
/// The host calls [`Self::sync`] on every render; transition side effects
/// run exactly once per edge of `visible`, never on re-renders caused by
/// unrelated prop or style changes. Mount counts as a transition into the
/// current state, so a popover mounted visible runs its show path once.
#[derive(Default)]
pub struct PopoverLifecycle {
    prev_visible: Option<bool>,
    dismiss_entry: Option<DismissRegistration>,
}

impl PopoverLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last synced visibility, or false before the first sync.
    pub fn is_visible(&self) -> bool {
        self.prev_visible.unwrap_or(false)
    }

    /// Observes the current visible flag and runs transition side effects
    /// when it changed since the previous sync.
    pub fn sync(&mut self, visible: bool, session: &PopoverSession) {
        let edge = match self.prev_visible {
            // Mounting hidden is not a transition; there is nothing to tear
            // down yet.
            None => visible,
            Some(prev) => prev != visible,
        };
        self.prev_visible = Some(visible);
        if !edge {
            return;
        }
        if visible {
            self.show(session);
        } else {
            self.hide(session);
        }
    }

    /// Releases the retained dismiss-stack entry. Safe to call in any state
    /// and more than once; the entry is unregistered exactly once. Hosts
    /// must call this on unmount so a popover hidden mid-flight never leaks
    /// a dismiss-stack entry.
    pub fn teardown(&mut self) {
        if let Some(entry) = self.dismiss_entry.take() {
            entry.unregister();
        }
    }

    fn show(&mut self, session: &PopoverSession) {
        (session.on_show)();
        session.channel.open(PopoverRegistration {
            surface: session.surface,
            anchor: session.anchor,
            close: session.on_close.clone(),
        });
        // One dismiss entry per popover identity at a time.
        if let Some(stale) = self.dismiss_entry.take() {
            stale.unregister();
        }
        let on_close = session.on_close.clone();
        let anchor = session.anchor;
        self.dismiss_entry = Some(
            session
                .stack
                .push_close_handler(move || on_close(anchor)),
        );
        session.stack.notify_alert_visibility_changing(true);
    }

    fn hide(&mut self, session: &PopoverSession) {
        (session.on_hide)();
        session.channel.close(session.anchor);
        session.stack.notify_modal_did_close();
        session.stack.notify_alert_visibility_changing(false);
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counters {
        shows: Cell<u32>,
        hides: Cell<u32>,
        closes: Cell<u32>,
    }

    fn session_with_counters(
        channel: &PopoverChannel,
        stack: &DismissStack,
        anchor: AnchorId,
    ) -> (PopoverSession, Rc<Counters>) {
        let counters = Rc::new(Counters {
            shows: Cell::new(0),
            hides: Cell::new(0),
            closes: Cell::new(0),
        });
        let mut session = PopoverSession::new(channel.clone(), stack.clone());
        session.anchor = Some(anchor);
        session.surface = Some(SurfaceId::next());
        let seen = counters.clone();
        session.on_show = Rc::new(move || seen.shows.set(seen.shows.get() + 1));
        let seen = counters.clone();
        session.on_hide = Rc::new(move || seen.hides.set(seen.hides.get() + 1));
        let seen = counters.clone();
        session.on_close = Rc::new(move |_| seen.closes.set(seen.closes.get() + 1));
        (session, counters)
    }

    #[test]
    fn transitions_fire_exactly_once_per_edge() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();
        let (session, counters) = session_with_counters(&channel, &stack, anchor);
        let mut lifecycle = PopoverLifecycle::new();

        lifecycle.sync(false, &session);
        lifecycle.sync(true, &session);
        // Unrelated re-renders with the same flag do nothing.
        lifecycle.sync(true, &session);
        lifecycle.sync(true, &session);
        lifecycle.sync(false, &session);
        lifecycle.sync(false, &session);

        assert_eq!(counters.shows.get(), 1);
        assert_eq!(counters.hides.get(), 1);
    }

    #[test]
    fn show_registers_and_hide_deregisters_everywhere() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();
        let (session, _) = session_with_counters(&channel, &stack, anchor);
        let mut lifecycle = PopoverLifecycle::new();

        lifecycle.sync(true, &session);
        assert!(channel.is_open_for(anchor));
        assert_eq!(stack.handler_count(), 1);
        assert!(stack.is_alert_visible());

        lifecycle.sync(false, &session);
        assert_eq!(channel.active_anchor(), None);
        assert_eq!(stack.handler_count(), 0);
        assert!(!stack.is_alert_visible());
    }

    #[test]
    fn mounting_visible_runs_the_show_path_once() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();
        let (session, counters) = session_with_counters(&channel, &stack, anchor);
        let mut lifecycle = PopoverLifecycle::new();

        lifecycle.sync(true, &session);
        assert_eq!(counters.shows.get(), 1);
        assert_eq!(counters.hides.get(), 0);
        assert!(channel.is_open_for(anchor));
    }

    #[test]
    fn mounting_hidden_has_no_side_effects() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();
        let (session, counters) = session_with_counters(&channel, &stack, anchor);
        let mut lifecycle = PopoverLifecycle::new();

        lifecycle.sync(false, &session);
        assert_eq!(counters.shows.get(), 0);
        assert_eq!(counters.hides.get(), 0);
        assert_eq!(stack.handler_count(), 0);
    }

    #[test]
    fn teardown_while_visible_releases_the_dismiss_entry() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();
        let (session, _) = session_with_counters(&channel, &stack, anchor);
        let mut lifecycle = PopoverLifecycle::new();

        lifecycle.sync(true, &session);
        assert_eq!(stack.handler_count(), 1);

        lifecycle.teardown();
        assert_eq!(stack.handler_count(), 0);
        // A second teardown is a no-op.
        lifecycle.teardown();
        assert_eq!(stack.handler_count(), 0);
    }

    #[test]
    fn dismiss_handler_routes_to_on_close_with_the_anchor() {
        let channel = PopoverChannel::new();
        let stack = DismissStack::new();
        let anchor = AnchorId::next();

        let closed_with = Rc::new(Cell::new(None));
        let mut session = PopoverSession::new(channel.clone(), stack.clone());
        session.anchor = Some(anchor);
        let seen = closed_with.clone();
        session.on_close = Rc::new(move |a| seen.set(a));

        let mut lifecycle = PopoverLifecycle::new();
        lifecycle.sync(true, &session);

        assert!(stack.close_topmost());
        assert_eq!(closed_with.get(), Some(anchor));
    }
}
