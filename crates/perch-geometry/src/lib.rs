//! Pure geometry & insets math for Perch

mod anchor;
mod insets;
mod padding;
mod units;

pub use anchor::*;
pub use insets::*;
pub use padding::*;
pub use units::*;

pub mod prelude {
    pub use crate::anchor::AnchorPosition;
    pub use crate::insets::EdgeInsets;
    pub use crate::padding::{modal_padding, ModalPaddingParams, PaddingAdjustment};
    pub use crate::units::WindowDimensions;
}
