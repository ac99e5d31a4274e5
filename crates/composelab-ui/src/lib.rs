//! High level UI primitives for composelab: the node tree, the layout pass,
//! measure policies and widgets.

pub mod layout;
mod modifier;
mod text;
mod theme;
mod tree;
pub mod widgets;

pub use layout::policies::{
    BoxMeasurePolicy, CrossAxisAlignment, FlexMeasurePolicy, LeafMeasurePolicy,
};
pub use layout::staggered_grid::{staggered_grid_layout, StaggeredGridMeasurePolicy};
pub use layout::{measure_layout, LayoutBox, LayoutTree};
pub use modifier::{
    BorderStroke, Color, CornerRadii, EdgeInsets, Modifier, Point, Rect, RoundedCornerShape,
    Size,
};
pub use text::{
    measure_text, MonospacedTextMeasurer, TextMeasurePolicy, TextMeasurer, TextMetrics, TextStyle,
};
pub use theme::{ColorScheme, Theme, Typography};
pub use tree::{NodeIdAllocator, NodeKind, UiNode, UiTreeBuilder};
pub use widgets::*;

pub use composelab_foundation::{
    LazyListItemInfo, LazyListLayoutInfo, LazyListMeasureConfig, LazyListState, ScrollState,
};
pub use composelab_ui_layout::{
    Alignment, Constraints, HorizontalAlignment, LayoutError, LinearArrangement, Measurable,
    MeasurePolicy, MeasureResult, NodeId, Placeable, Placement, VerticalAlignment,
};

pub mod prelude {
    pub use crate::layout::{measure_layout, LayoutTree};
    pub use crate::modifier::{Modifier, Size};
    pub use crate::tree::{UiNode, UiTreeBuilder};
    pub use crate::widgets::*;
}
