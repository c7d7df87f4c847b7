//! Stable identities for popover surfaces and anchors

use std::cell::Cell;

thread_local! {
    static NEXT_HANDLE: Cell<u64> = const { Cell::new(1) };
}

fn next_handle() -> u64 {
    NEXT_HANDLE.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// Stable identity of the element a popover is anchored to.
///
/// Registries match registrations by anchor identity; a popover without an
/// anchor handle (`Option::None`) is rendered but never registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(u64);

impl AnchorId {
    /// Allocates a fresh anchor identity.
    pub fn next() -> Self {
        Self(next_handle())
    }
}

/// Stable identity of the popover's positioned surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocates a fresh surface identity.
    pub fn next() -> Self {
        Self(next_handle())
    }
}
