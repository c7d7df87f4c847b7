//! Anchored placement contracts & policies for Perch

mod constants;
mod engine;
mod style;

pub use constants::*;
pub use engine::*;
pub use style::*;

pub mod prelude {
    pub use crate::constants::StyleConstants;
    pub use crate::engine::{compute_modal_style, ComputedModalStyle, ModalVariant, ViewportSpec};
    pub use crate::style::{FloatStyle, Position};
}
