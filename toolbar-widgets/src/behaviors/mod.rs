//! Reusable interaction behaviours shared by overlay widgets.
//!
//! Each behaviour is parameterized by whether the overlay is open, a close
//! callback, and the overlay's root element ID.

pub mod arrow_focus;
pub mod click_outside;

pub use arrow_focus::ArrowFocus;
pub use click_outside::ClickOutside;
