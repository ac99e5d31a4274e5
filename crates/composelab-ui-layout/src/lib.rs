//! Layout contracts & policies for composelab

mod alignment;
mod arrangement;
mod axis;
mod constraints;
mod core;
mod error;

pub use alignment::*;
pub use arrangement::*;
pub use axis::*;
pub use constraints::*;
pub use core::*;
pub use error::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::{Arrangement, LinearArrangement};
    pub use crate::constraints::Constraints;
    pub use crate::core::{
        FlexParentData, Measurable, MeasurePolicy, MeasureResult, Placeable, Placement,
    };
    pub use crate::error::LayoutError;
}
