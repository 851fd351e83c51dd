//! Dropdown selector: a trigger plus an overlay of text or icon options.
//!
//! The parent owns the selection through [`DropdownProps`]; a [`Dropdown`]
//! owns only its open state, typed text and overlay placement.

mod events;
pub mod filter;
mod item;
pub mod placement;
mod props;
mod render;
mod state;

pub use filter::{matches_query, visible_options, VisibleOption};
pub use item::{image_index, DropdownItem, ImageItem};
pub use placement::{place_overlay, Placement, OVERLAY_OFFSET_BELOW};
pub use props::{
    DisplayButtonFn, DropdownProps, ItemCallback, ItemStyleFn, LabelFn, OpenedCallback,
    ValidatorFn, DEFAULT_WIDTH, DENSE_ROW_HEIGHT,
};
pub use render::{item_label, trigger_display, visible_items, TriggerDisplay};
pub use state::{Dropdown, DropdownId, DropdownState};
