//! The measure/place contract between a parent's policy and its children.
//!
//! A policy receives its children as [`Measurable`]s, measures each into a
//! [`Placeable`], places the placeables relative to its own origin and reports
//! its size plus the placements in a [`MeasureResult`].

use crate::constraints::Constraints;
use composelab_ui_graphics::Size;

/// Build-order id of a UI node; 0 is never allocated.
pub type NodeId = usize;

/// Weight a child requests from a Row or Column.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexParentData {
    /// Share of the remaining main-axis space; children with weight 0 wrap their content.
    pub weight: f32,
    /// Tight main-axis constraints when true, loose otherwise.
    pub fill: bool,
}

impl FlexParentData {
    pub fn new(weight: f32, fill: bool) -> Self {
        Self { weight, fill }
    }

    pub fn has_weight(&self) -> bool {
        self.weight > 0.0
    }
}

/// A child as its parent's policy sees it.
///
/// Intrinsic queries must not have side effects; `measure` may be called at
/// most once per layout pass.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Narrowest width the child can take at `height` without clipping.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Width past which more space changes nothing.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    fn min_intrinsic_height(&self, width: f32) -> f32;

    fn max_intrinsic_height(&self, width: f32) -> f32;

    /// Weight data attached by the child's modifier, if any.
    fn flex_parent_data(&self) -> Option<FlexParentData> {
        None
    }
}

/// A measured child waiting for its position.
pub trait Placeable {
    /// `x`/`y` are relative to the parent's content origin.
    fn place(&self, x: f32, y: f32);

    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn node_id(&self) -> NodeId;
}

/// How a node sizes itself and arranges its children.
pub trait MeasurePolicy {
    /// Measures and places `measurables`; the returned size must satisfy `constraints`.
    fn measure(&self, measurables: &[Box<dyn Measurable>], constraints: Constraints)
        -> MeasureResult;

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    /// Short name used in tree dumps and logs.
    fn debug_name(&self) -> &str {
        "MeasurePolicy"
    }
}

/// Size chosen by a policy and where it put each placed child.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node_id: NodeId,
    pub x: f32,
    pub y: f32,
    pub z_index: i32,
}

impl Placement {
    pub fn new(node_id: NodeId, x: f32, y: f32, z_index: i32) -> Self {
        Self {
            node_id,
            x,
            y,
            z_index,
        }
    }
}
