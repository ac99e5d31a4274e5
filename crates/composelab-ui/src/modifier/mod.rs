//! Modifier value type and its per-concern builder methods.
//!
//! A [`Modifier`] is resolved eagerly: every builder call folds into a flat set
//! of properties that the layout pass reads directly.

mod background;
mod fill;
mod padding;
mod scroll;
mod size;
mod weight;

use composelab_foundation::ScrollState;
use composelab_ui_layout::FlexParentData;

pub use composelab_ui_graphics::{
    Color, CornerRadii, EdgeInsets, Point, Rect, RoundedCornerShape, Size,
};

pub use background::BorderStroke;

/// Decorations and layout adjustments attached to a node.
///
/// Padding accumulates across calls. Size, fill, colors and weight follow the
/// last call. A preferred size describes the node's outer box, padding
/// included.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    padding: EdgeInsets,
    width: Option<f32>,
    height: Option<f32>,
    fill_width: Option<f32>,
    fill_height: Option<f32>,
    background: Option<Color>,
    border: Option<BorderStroke>,
    shape: Option<RoundedCornerShape>,
    weight: Option<FlexParentData>,
    horizontal_scroll: Option<ScrollState>,
    vertical_scroll: Option<ScrollState>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Applies every property set on `other` on top of `self`.
    pub fn then(mut self, other: Modifier) -> Self {
        self.padding += other.padding;
        self.width = other.width.or(self.width);
        self.height = other.height.or(self.height);
        self.fill_width = other.fill_width.or(self.fill_width);
        self.fill_height = other.fill_height.or(self.fill_height);
        self.background = other.background.or(self.background);
        self.border = other.border.or(self.border);
        self.shape = other.shape.or(self.shape);
        self.weight = other.weight.or(self.weight);
        self.horizontal_scroll = other.horizontal_scroll.or(self.horizontal_scroll);
        self.vertical_scroll = other.vertical_scroll.or(self.vertical_scroll);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
