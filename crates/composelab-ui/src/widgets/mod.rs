//! UI widget functions.
//!
//! Every widget takes the [`UiTreeBuilder`](crate::UiTreeBuilder) first and
//! returns the node it built. Containers take a `content` closure that builds
//! their children.

pub mod app_bar;
pub mod box_widget;
pub mod button;
pub mod chip;
pub mod column;
pub mod image;
pub mod layout;
pub mod lazy_list;
pub mod list_items;
pub mod row;
pub mod scaffold;
pub mod spacer;
pub mod staggered_grid;
pub mod text;
pub mod topics;

pub use app_bar::*;
pub use box_widget::*;
pub use button::*;
pub use chip::*;
pub use column::*;
pub use image::*;
pub use layout::*;
pub use lazy_list::*;
pub use list_items::*;
pub use row::*;
pub use scaffold::*;
pub use spacer::*;
pub use staggered_grid::*;
pub use text::*;
pub use topics::*;
