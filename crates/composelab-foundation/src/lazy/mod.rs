//! Lazy list measurement and state.
//!
//! Only items that intersect the viewport (plus a small buffer on either side)
//! are measured on each pass.

mod animated_scroll;
mod lazy_list_measure;
mod lazy_list_measured_item;
mod lazy_list_state;

pub use animated_scroll::*;
pub use lazy_list_measure::*;
pub use lazy_list_measured_item::*;
pub use lazy_list_state::*;

/// Estimated item size used before any item has been measured.
pub const DEFAULT_ITEM_SIZE_ESTIMATE: f32 = 48.0;
