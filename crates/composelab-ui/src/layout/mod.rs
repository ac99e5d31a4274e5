//! Layout pass over a [`UiNode`] tree.
//!
//! [`measure_layout`] walks the tree once: each node resolves its modifier
//! into constraints, hands its children to its measure policy as
//! [`Measurable`]s and records where the policy placed them. The result is a
//! [`LayoutTree`] of absolute rectangles.

pub mod policies;
pub mod staggered_grid;

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use composelab_foundation::ScrollState;
use composelab_ui_layout::{
    Constraints, FlexParentData, LayoutError, Measurable, NodeId, Placeable,
};
use log::{debug, trace};

use crate::modifier::{CornerRadii, Modifier, Point, Rect, Size};
use crate::tree::{NodeKind, UiNode};

/// Result of running layout for a UI tree.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn into_root(self) -> LayoutBox {
        self.root
    }

    pub fn find(&self, id: NodeId) -> Option<&LayoutBox> {
        self.iter().find(|layout_box| layout_box.node_id == id)
    }

    /// Absolute rectangle of `id`.
    pub fn rect_of(&self, id: NodeId) -> Result<Rect, LayoutError> {
        self.find(id)
            .map(|layout_box| layout_box.rect)
            .ok_or(LayoutError::UnknownNode { id })
    }

    /// Pre-order traversal of every laid out node.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutBox> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }

    /// Indented, one line per node.
    pub fn dump(&self) -> String {
        fn write_box(out: &mut String, layout_box: &LayoutBox, depth: usize) {
            let rect = layout_box.rect;
            let _ = writeln!(
                out,
                "{:indent$}{} #{} [{}, {}, {}x{}]",
                "",
                layout_box.kind,
                layout_box.node_id,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                indent = depth * 2
            );
            for child in &layout_box.children {
                write_box(out, child, depth + 1);
            }
        }

        let mut out = String::new();
        write_box(&mut out, &self.root, 0);
        out
    }
}

/// Layout information for a single node.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub node_id: NodeId,
    /// Position and size in root coordinates.
    pub rect: Rect,
    pub kind: NodeKind,
    pub modifier: Modifier,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn new(
        node_id: NodeId,
        rect: Rect,
        kind: NodeKind,
        modifier: Modifier,
        children: Vec<LayoutBox>,
    ) -> Self {
        Self {
            node_id,
            rect,
            kind,
            modifier,
            children,
        }
    }

    /// Corner radii of the node's shape at its laid out size.
    pub fn corner_radii(&self) -> Option<CornerRadii> {
        self.modifier
            .corner_shape()
            .map(|shape| shape.resolve(self.rect.width, self.rect.height))
    }
}

/// Measures `root` within `max_size` and returns the placed tree.
///
/// Children a policy measures but never places (or never measures at all,
/// like lazy list items outside the viewport) are left out of the result.
pub fn measure_layout(root: &UiNode, max_size: Size) -> Result<LayoutTree, LayoutError> {
    let constraints = Constraints::loose(max_size.width, max_size.height);
    constraints.validate()?;
    debug!(
        "measure_layout: root #{} ({} nodes) in {}x{}",
        root.id,
        root.node_count(),
        max_size.width,
        max_size.height
    );

    let pass = LayoutPass::default();
    let measured = measure_node(root, constraints, &pass)?;
    Ok(LayoutTree::new(place(&measured, Point::ZERO)))
}

/// State shared by every measurable of one layout pass.
#[derive(Clone, Default)]
struct LayoutPass {
    error: Rc<RefCell<Option<LayoutError>>>,
}

impl LayoutPass {
    fn record(&self, error: LayoutError) {
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    fn take_error(&self) -> Result<(), LayoutError> {
        match self.error.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

struct MeasuredNode {
    node_id: NodeId,
    kind: NodeKind,
    modifier: Modifier,
    size: Size,
    children: Vec<MeasuredChild>,
}

struct MeasuredChild {
    node: Rc<MeasuredNode>,
    offset: Point,
}

fn measure_node(
    node: &UiNode,
    incoming: Constraints,
    pass: &LayoutPass,
) -> Result<Rc<MeasuredNode>, LayoutError> {
    incoming.validate()?;
    let modifier = &node.modifier;
    let outer = modifier.resolve_constraints(incoming);
    outer.validate()?;
    let padding = modifier.padding_values();
    let mut inner = outer.deflate(padding.horizontal_sum(), padding.vertical_sum());
    if modifier.horizontal_scroll_state().is_some() {
        inner = inner.copy_with_width(0.0, f32::INFINITY);
    }
    if modifier.vertical_scroll_state().is_some() {
        inner = inner.copy_with_height(0.0, f32::INFINITY);
    }

    let children: Vec<ChildMeasurable> = node
        .children
        .iter()
        .map(|child| ChildMeasurable::new(Rc::clone(child), pass.clone()))
        .collect();
    let records: Vec<ChildRecord> = children.iter().map(ChildMeasurable::record).collect();
    let measurables: Vec<Box<dyn Measurable>> = children
        .into_iter()
        .map(|child| Box::new(child) as Box<dyn Measurable>)
        .collect();

    let result = node.policy.measure(&measurables, inner);
    pass.take_error()?;

    let (width, height) = outer.constrain(
        result.size.width + padding.horizontal_sum(),
        result.size.height + padding.vertical_sum(),
    );
    let scroll = Point::new(
        scroll_offset(
            modifier.horizontal_scroll_state(),
            result.size.width,
            width - padding.horizontal_sum(),
        ),
        scroll_offset(
            modifier.vertical_scroll_state(),
            result.size.height,
            height - padding.vertical_sum(),
        ),
    );

    let children = records
        .into_iter()
        .filter_map(|record| {
            let node = record.measured.borrow_mut().take()?;
            let position = record.position.get()?;
            Some(MeasuredChild {
                node,
                offset: Point::new(
                    position.x + padding.left - scroll.x,
                    position.y + padding.top - scroll.y,
                ),
            })
        })
        .collect();

    trace!(
        "measured #{} {} with {}: {}x{}",
        node.id,
        node.kind,
        node.policy.debug_name(),
        width,
        height
    );
    Ok(Rc::new(MeasuredNode {
        node_id: node.id,
        kind: node.kind.clone(),
        modifier: node.modifier.clone(),
        size: Size::new(width, height),
        children,
    }))
}

/// Publishes the scrollable range to `state` and returns the clamped offset.
fn scroll_offset(state: Option<&ScrollState>, content: f32, viewport: f32) -> f32 {
    match state {
        Some(state) => {
            state.set_max_value((content - viewport).max(0.0));
            state.value()
        }
        None => 0.0,
    }
}

fn place(node: &MeasuredNode, origin: Point) -> LayoutBox {
    let rect = Rect::from_origin_size(origin, node.size);
    let children = node
        .children
        .iter()
        .map(|child| place(&child.node, origin + child.offset))
        .collect();
    LayoutBox::new(
        node.node_id,
        rect,
        node.kind.clone(),
        node.modifier.clone(),
        children,
    )
}

struct ChildRecord {
    measured: Rc<RefCell<Option<Rc<MeasuredNode>>>>,
    position: Rc<Cell<Option<Point>>>,
}

/// A child node seen through the [`Measurable`] interface of its parent's policy.
struct ChildMeasurable {
    node: Rc<UiNode>,
    pass: LayoutPass,
    measured: Rc<RefCell<Option<Rc<MeasuredNode>>>>,
    position: Rc<Cell<Option<Point>>>,
}

impl ChildMeasurable {
    fn new(node: Rc<UiNode>, pass: LayoutPass) -> Self {
        Self {
            node,
            pass,
            measured: Rc::new(RefCell::new(None)),
            position: Rc::new(Cell::new(None)),
        }
    }

    fn record(&self) -> ChildRecord {
        ChildRecord {
            measured: Rc::clone(&self.measured),
            position: Rc::clone(&self.position),
        }
    }

    fn child_measurables(&self) -> Vec<Box<dyn Measurable>> {
        self.node
            .children
            .iter()
            .map(|child| {
                Box::new(ChildMeasurable::new(Rc::clone(child), self.pass.clone()))
                    as Box<dyn Measurable>
            })
            .collect()
    }

    /// Applies the node's own size and padding on top of a policy intrinsic.
    fn intrinsic(preferred: Option<f32>, padding: f32, content: impl FnOnce() -> f32) -> f32 {
        preferred.unwrap_or_else(|| content() + padding)
    }
}

impl Measurable for ChildMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        self.position.set(None);
        let size = match measure_node(&self.node, constraints, &self.pass) {
            Ok(measured) => {
                let size = measured.size;
                *self.measured.borrow_mut() = Some(measured);
                size
            }
            Err(error) => {
                self.pass.record(error);
                self.measured.borrow_mut().take();
                Size::ZERO
            }
        };
        Box::new(ChildPlaceable {
            node_id: self.node.id,
            size,
            position: Rc::clone(&self.position),
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        let padding = self.node.modifier.padding_values();
        Self::intrinsic(self.node.modifier.preferred_size().0, padding.horizontal_sum(), || {
            self.node
                .policy
                .min_intrinsic_width(&self.child_measurables(), height)
        })
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let padding = self.node.modifier.padding_values();
        Self::intrinsic(self.node.modifier.preferred_size().0, padding.horizontal_sum(), || {
            self.node
                .policy
                .max_intrinsic_width(&self.child_measurables(), height)
        })
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let padding = self.node.modifier.padding_values();
        Self::intrinsic(self.node.modifier.preferred_size().1, padding.vertical_sum(), || {
            self.node
                .policy
                .min_intrinsic_height(&self.child_measurables(), width)
        })
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let padding = self.node.modifier.padding_values();
        Self::intrinsic(self.node.modifier.preferred_size().1, padding.vertical_sum(), || {
            self.node
                .policy
                .max_intrinsic_height(&self.child_measurables(), width)
        })
    }

    fn flex_parent_data(&self) -> Option<FlexParentData> {
        self.node.modifier.flex_parent_data()
    }
}

struct ChildPlaceable {
    node_id: NodeId,
    size: Size,
    position: Rc<Cell<Option<Point>>>,
}

impl Placeable for ChildPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.position.set(Some(Point::new(x, y)));
    }

    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn node_id(&self) -> NodeId {
        self.node_id
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
