use super::*;
use crate::layout::policies::BoxMeasurePolicy;
use crate::tree::UiTreeBuilder;
use crate::widgets::{BoxLayout, BoxSpec, Column, ColumnSpec, Row, RowSpec, Spacer, StaggeredGrid};
use composelab_foundation::ScrollState;
use composelab_ui_layout::{MeasurePolicy, MeasureResult};

fn leaf(ui: &mut UiTreeBuilder, width: f32, height: f32) -> UiNode {
    Spacer(ui, Size::new(width, height))
}

/// Measures every child with inverted constraints.
struct BrokenPolicy;

impl MeasurePolicy for BrokenPolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        _constraints: Constraints,
    ) -> MeasureResult {
        let inverted = Constraints {
            min_width: 10.0,
            max_width: 5.0,
            min_height: 0.0,
            max_height: 5.0,
        };
        for measurable in measurables {
            measurable.measure(inverted);
        }
        MeasureResult::new(Size::ZERO, vec![])
    }

    fn min_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        0.0
    }

    fn min_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }
}

/// Measures children without placing them.
struct MeasureOnlyPolicy;

impl MeasurePolicy for MeasureOnlyPolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        for measurable in measurables {
            measurable.measure(constraints);
        }
        MeasureResult::new(Size::new(1.0, 1.0), vec![])
    }

    fn min_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        0.0
    }

    fn min_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }
}

#[test]
fn padding_grows_the_node_and_offsets_children() {
    let mut ui = UiTreeBuilder::new();
    let root = BoxLayout(
        &mut ui,
        Modifier::empty().padding(8.0).padding_horizontal(2.0),
        BoxSpec::new(),
        |ui| vec![leaf(ui, 30.0, 20.0)],
    );

    let tree = measure_layout(&root, Size::new(500.0, 500.0)).unwrap();

    assert_eq!(tree.root().rect.size(), Size::new(50.0, 36.0));
    assert_eq!(tree.root().children[0].rect.origin(), Point::new(10.0, 8.0));
}

#[test]
fn child_rects_are_absolute() {
    let mut ui = UiTreeBuilder::new();
    let root = Column(&mut ui, Modifier::empty().padding(5.0), ColumnSpec::new(), |ui| {
        vec![
            leaf(ui, 10.0, 10.0),
            Row(ui, Modifier::empty().padding(3.0), RowSpec::new(), |ui| {
                vec![leaf(ui, 7.0, 7.0), leaf(ui, 4.0, 4.0)]
            }),
        ]
    });

    let tree = measure_layout(&root, Size::new(500.0, 500.0)).unwrap();

    let row = &tree.root().children[1];
    assert_eq!(row.rect.origin(), Point::new(5.0, 15.0));
    assert_eq!(row.children[1].rect.origin(), Point::new(15.0, 18.0));
}

#[test]
fn fill_and_preferred_size_shape_the_outer_box() {
    let mut ui = UiTreeBuilder::new();
    let root = Column(&mut ui, Modifier::empty(), ColumnSpec::new(), |ui| {
        vec![
            BoxLayout(ui, Modifier::empty().fill_max_width().height(30.0), BoxSpec::new(), |_| vec![]),
            BoxLayout(ui, Modifier::empty().size_points(40.0, 40.0).padding(4.0), BoxSpec::new(), |ui| {
                vec![leaf(ui, 100.0, 100.0)]
            }),
        ]
    });

    let tree = measure_layout(&root, Size::new(320.0, 480.0)).unwrap();

    let children = &tree.root().children;
    assert_eq!(children[0].rect.size(), Size::new(320.0, 30.0));
    assert_eq!(children[1].rect.size(), Size::new(40.0, 40.0));
    assert_eq!(children[1].children[0].rect.size(), Size::new(32.0, 32.0));
}

#[test]
fn invalid_root_size_is_rejected() {
    let mut ui = UiTreeBuilder::new();
    let root = leaf(&mut ui, 1.0, 1.0);

    let negative = measure_layout(&root, Size::new(-1.0, 10.0));
    assert!(matches!(
        negative,
        Err(LayoutError::InvalidConstraints { axis: "width", .. })
    ));
    assert!(measure_layout(&root, Size::new(10.0, f32::NAN)).is_err());
}

#[test]
fn nan_size_requests_fail_instead_of_panicking() {
    let mut ui = UiTreeBuilder::new();
    let root = BoxLayout(&mut ui, Modifier::empty().width(f32::NAN), BoxSpec::new(), |_| vec![]);
    assert!(matches!(
        measure_layout(&root, Size::new(100.0, 100.0)),
        Err(LayoutError::InvalidConstraints { axis: "width", .. })
    ));

    let mut ui = UiTreeBuilder::new();
    let root = BoxLayout(
        &mut ui,
        Modifier::empty().fill_max_height_fraction(f32::NAN),
        BoxSpec::new(),
        |ui| vec![leaf(ui, 10.0, 10.0)],
    );
    assert!(matches!(
        measure_layout(&root, Size::new(100.0, 100.0)),
        Err(LayoutError::InvalidConstraints { axis: "height", .. })
    ));
}

#[test]
fn invalid_child_constraints_surface_as_errors() {
    let mut ui = UiTreeBuilder::new();
    let child = leaf(&mut ui, 1.0, 1.0);
    let root = ui.node(Modifier::empty(), NodeKind::Layout, BrokenPolicy, vec![child]);

    let result = measure_layout(&root, Size::new(100.0, 100.0));

    assert_eq!(
        result.map(|_| ()),
        Err(LayoutError::InvalidConstraints {
            axis: "width",
            min: 10.0,
            max: 5.0,
        })
    );
}

#[test]
fn unplaced_children_are_left_out() {
    let mut ui = UiTreeBuilder::new();
    let child = leaf(&mut ui, 1.0, 1.0);
    let root = ui.node(Modifier::empty(), NodeKind::Layout, MeasureOnlyPolicy, vec![child]);

    let tree = measure_layout(&root, Size::new(100.0, 100.0)).unwrap();

    assert!(tree.root().children.is_empty());
}

#[test]
fn horizontal_scroll_measures_content_unbounded_but_clamps_itself() {
    let mut ui = UiTreeBuilder::new();
    let scroll = ScrollState::new(0.0);
    let grid = StaggeredGrid(
        &mut ui,
        2,
        Modifier::empty().horizontal_scroll(scroll.clone()),
        |ui| (0..6).map(|_| leaf(ui, 100.0, 10.0)).collect(),
    )
    .unwrap();

    let tree = measure_layout(&grid, Size::new(200.0, 100.0)).unwrap();

    assert_eq!(tree.root().rect.size(), Size::new(200.0, 20.0));
    assert_eq!(scroll.max_value(), 100.0);
    let rightmost = tree.iter().map(|b| b.rect.right()).fold(0.0, f32::max);
    assert_eq!(rightmost, 300.0);

    scroll.scroll_to(60.0);
    let tree = measure_layout(&grid, Size::new(200.0, 100.0)).unwrap();
    assert_eq!(tree.root().children[0].rect.x, -60.0);
}

#[test]
fn tree_queries() {
    let mut ui = UiTreeBuilder::new();
    let root = BoxLayout(&mut ui, Modifier::empty(), BoxSpec::new(), |ui| {
        vec![
            Row(ui, Modifier::empty(), RowSpec::new(), |ui| vec![leaf(ui, 5.0, 5.0)]),
            leaf(ui, 8.0, 8.0),
        ]
    });

    let tree = measure_layout(&root, Size::new(50.0, 50.0)).unwrap();

    let order: Vec<NodeId> = tree.iter().map(|b| b.node_id).collect();
    assert_eq!(order, vec![4, 2, 1, 3]);
    assert_eq!(tree.find(3).map(|b| b.rect.width), Some(8.0));
    assert_eq!(tree.rect_of(1).map(|rect| rect.height), Ok(5.0));
    assert_eq!(tree.rect_of(99), Err(LayoutError::UnknownNode { id: 99 }));
    assert_eq!(
        tree.dump(),
        "Layout #4 [0, 0, 8x8]\n  Layout #2 [0, 0, 5x5]\n    Spacer #1 [0, 0, 5x5]\n  Spacer #3 [0, 0, 8x8]\n"
    );
}

#[test]
fn layout_does_not_mutate_the_tree() {
    let mut ui = UiTreeBuilder::new();
    let root = ui.node(
        Modifier::empty(),
        NodeKind::Layout,
        BoxMeasurePolicy::default(),
        vec![],
    );

    let first = measure_layout(&root, Size::new(10.0, 10.0)).unwrap().dump();
    let second = measure_layout(&root, Size::new(10.0, 10.0)).unwrap().dump();

    assert_eq!(first, second);
    assert_eq!(first, "Layout #1 [0, 0, 0x0]\n");
}
