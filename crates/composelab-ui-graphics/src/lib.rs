//! Pure math/data for layout in composelab
//!
//! Geometry primitives, colors and shapes shared by every other
//! composelab crate. Nothing in here knows about measurement or nodes.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, RoundedCornerShape, Size};
}
