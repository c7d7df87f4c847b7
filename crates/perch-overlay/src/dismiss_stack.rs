//! Global dismiss stack and modal visibility notifications

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

type CloseHandler = Box<dyn FnMut()>;

#[derive(Default)]
struct StackInner {
    next_id: u64,
    handlers: IndexMap<u64, CloseHandler>,
    alert_listeners: SmallVec<[(u64, Box<dyn FnMut(bool)>); 2]>,
    did_close_listeners: SmallVec<[(u64, Box<dyn FnMut()>); 2]>,
    // Listener ids unsubscribed while a notification is in flight; their
    // entries live outside the inner lists at that moment.
    retired: SmallVec<[u64; 2]>,
    notify_depth: u32,
    alert_visible: bool,
}

impl StackInner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Token returned by [`DismissStack::push_close_handler`].
///
/// `unregister` removes exactly the entry it was issued for, wherever it
/// sits in the stack; calling it again, or after the stack is gone, is a
/// no-op.
pub struct DismissRegistration {
    stack: Weak<RefCell<StackInner>>,
    id: u64,
}

impl DismissRegistration {
    pub fn unregister(&self) {
        if let Some(inner) = self.stack.upgrade() {
            inner.borrow_mut().handlers.shift_remove(&self.id);
        }
    }
}

/// Unsubscribe token for the stack's observer notifications.
pub struct DismissSubscription {
    stack: Weak<RefCell<StackInner>>,
    id: u64,
    kind: SubscriptionKind,
}

#[derive(Clone, Copy)]
enum SubscriptionKind {
    AlertVisibility,
    ModalDidClose,
}

impl DismissSubscription {
    pub fn unsubscribe(&self) {
        let Some(inner) = self.stack.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let found = match self.kind {
            SubscriptionKind::AlertVisibility => {
                let before = inner.alert_listeners.len();
                inner.alert_listeners.retain(|(id, _)| *id != self.id);
                inner.alert_listeners.len() != before
            }
            SubscriptionKind::ModalDidClose => {
                let before = inner.did_close_listeners.len();
                inner.did_close_listeners.retain(|(id, _)| *id != self.id);
                inner.did_close_listeners.len() != before
            }
        };
        if !found && inner.notify_depth > 0 {
            inner.retired.push(self.id);
        }
    }
}

/// LIFO of close callbacks for open overlays, independent of the popover
/// channel.
///
/// Hosts (a hardware back-button handler, an escape-key handler) call
/// [`Self::close_topmost`] to dismiss the most recently opened overlay
/// without knowing about it directly. Like [`crate::PopoverChannel`], the
/// stack is an explicitly passed object cloned into each popover.
#[derive(Clone, Default)]
pub struct DismissStack {
    inner: Rc<RefCell<StackInner>>,
}

impl DismissStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a close handler and returns its unregister token. The entry
    /// stays until the token unregisters it or [`Self::close_topmost`] pops
    /// it.
    pub fn push_close_handler(&self, handler: impl FnMut() + 'static) -> DismissRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.handlers.insert(id, Box::new(handler));
        log::trace!("dismiss stack push, {} pending", inner.handlers.len());
        DismissRegistration {
            stack: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Pops and invokes the most recently pushed, still-registered close
    /// handler. Returns whether one existed. The popped entry is gone
    /// afterwards, so the owner's later unregister is a harmless no-op.
    pub fn close_topmost(&self) -> bool {
        let handler = {
            let mut inner = self.inner.borrow_mut();
            inner.handlers.pop()
        };
        let Some((_, mut handler)) = handler else {
            return false;
        };
        handler();
        true
    }

    /// Number of currently registered close handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Whether the most recent alert-visibility notification announced a
    /// visible modal.
    pub fn is_alert_visible(&self) -> bool {
        self.inner.borrow().alert_visible
    }

    /// Subscribes to alert-visibility notifications.
    pub fn on_alert_visibility_changing(
        &self,
        listener: impl FnMut(bool) + 'static,
    ) -> DismissSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.alert_listeners.push((id, Box::new(listener)));
        DismissSubscription {
            stack: Rc::downgrade(&self.inner),
            id,
            kind: SubscriptionKind::AlertVisibility,
        }
    }

    /// Subscribes to modal-did-close notifications.
    pub fn on_modal_did_close(&self, listener: impl FnMut() + 'static) -> DismissSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.did_close_listeners.push((id, Box::new(listener)));
        DismissSubscription {
            stack: Rc::downgrade(&self.inner),
            id,
            kind: SubscriptionKind::ModalDidClose,
        }
    }

    /// Fire-and-forget notification that an alert-style modal is about to
    /// change visibility.
    pub fn notify_alert_visibility_changing(&self, visible: bool) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.alert_visible = visible;
            inner.notify_depth += 1;
            mem::take(&mut inner.alert_listeners)
        };
        for (_, listener) in listeners.iter_mut() {
            listener(visible);
        }
        let mut inner = self.inner.borrow_mut();
        inner.notify_depth -= 1;
        let retired = mem::take(&mut inner.retired);
        listeners.retain(|(id, _)| !retired.contains(id));
        let added_during_notify = mem::take(&mut inner.alert_listeners);
        listeners.extend(added_during_notify);
        inner.alert_listeners = listeners;
    }

    /// Fire-and-forget notification that a modal finished closing.
    pub fn notify_modal_did_close(&self) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.notify_depth += 1;
            mem::take(&mut inner.did_close_listeners)
        };
        for (_, listener) in listeners.iter_mut() {
            listener();
        }
        let mut inner = self.inner.borrow_mut();
        inner.notify_depth -= 1;
        let retired = mem::take(&mut inner.retired);
        listeners.retain(|(id, _)| !retired.contains(id));
        let added_during_notify = mem::take(&mut inner.did_close_listeners);
        listeners.extend(added_during_notify);
        inner.did_close_listeners = listeners;
    }
}
