//! Overlay lifecycle & coordination for Perch

mod channel;
mod dismiss_stack;
mod handle;
mod lifecycle;
mod popover;

pub use channel::*;
pub use dismiss_stack::*;
pub use handle::*;
pub use lifecycle::*;
pub use popover::*;

pub mod prelude {
    pub use crate::channel::{PopoverChannel, PopoverRegistration};
    pub use crate::dismiss_stack::{DismissRegistration, DismissStack};
    pub use crate::handle::{AnchorId, SurfaceId};
    pub use crate::lifecycle::{PopoverLifecycle, PopoverSession};
    pub use crate::popover::{Popover, PopoverEnv, PopoverFrame, PopoverSpec};
}
