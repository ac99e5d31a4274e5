use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use composelab_ui_layout::NodeId;

/// Child of fixed size that counts how often it is measured and records every
/// constraint it receives.
struct ProbeMeasurable {
    id: NodeId,
    width: f32,
    height: f32,
    measure_count: Rc<Cell<usize>>,
    received: Rc<RefCell<Vec<Constraints>>>,
    placed_at: Rc<Cell<Option<(f32, f32)>>>,
}

struct ProbePlaceable {
    id: NodeId,
    width: f32,
    height: f32,
    placed_at: Rc<Cell<Option<(f32, f32)>>>,
}

impl Placeable for ProbePlaceable {
    fn place(&self, x: f32, y: f32) {
        self.placed_at.set(Some((x, y)));
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn node_id(&self) -> NodeId {
        self.id
    }
}

impl Measurable for ProbeMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        self.measure_count.set(self.measure_count.get() + 1);
        self.received.borrow_mut().push(constraints);
        Box::new(ProbePlaceable {
            id: self.id,
            width: self.width,
            height: self.height,
            placed_at: Rc::clone(&self.placed_at),
        })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.width / 2.0
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.height / 2.0
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.height
    }
}

struct Probes {
    measurables: Vec<Box<dyn Measurable>>,
    counts: Vec<Rc<Cell<usize>>>,
    received: Rc<RefCell<Vec<Constraints>>>,
    positions: Vec<Rc<Cell<Option<(f32, f32)>>>>,
}

impl Probes {
    /// Children with ids 100, 101, ... in input order.
    fn new(sizes: &[(f32, f32)]) -> Self {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut probes = Probes {
            measurables: Vec::new(),
            counts: Vec::new(),
            received: Rc::clone(&received),
            positions: Vec::new(),
        };
        for (index, &(width, height)) in sizes.iter().enumerate() {
            let measure_count = Rc::new(Cell::new(0));
            let placed_at = Rc::new(Cell::new(None));
            probes.counts.push(Rc::clone(&measure_count));
            probes.positions.push(Rc::clone(&placed_at));
            probes.measurables.push(Box::new(ProbeMeasurable {
                id: 100 + index,
                width,
                height,
                measure_count,
                received: Rc::clone(&received),
                placed_at,
            }));
        }
        probes
    }

    fn uniform(count: usize, width: f32, height: f32) -> Self {
        Self::new(&vec![(width, height); count])
    }

    fn placed(&self) -> Vec<(f32, f32)> {
        self.positions
            .iter()
            .map(|cell| cell.get().expect("child was not placed"))
            .collect()
    }
}

fn row_of_each_child(result: &MeasureResult) -> Vec<usize> {
    let mut row_tops: Vec<f32> = result.placements.iter().map(|p| p.y).collect();
    row_tops.sort_by(f32::total_cmp);
    row_tops.dedup();
    result
        .placements
        .iter()
        .map(|p| row_tops.iter().position(|top| *top == p.y).unwrap_or(usize::MAX))
        .collect()
}

#[test]
fn zero_rows_is_rejected_before_measuring() {
    let probes = Probes::uniform(3, 10.0, 10.0);

    let result = staggered_grid_layout(&probes.measurables, Constraints::loose(100.0, 100.0), 0);

    assert_eq!(result, Err(LayoutError::InvalidRowCount { rows: 0 }));
    assert!(probes.counts.iter().all(|count| count.get() == 0));
    assert_eq!(
        StaggeredGridMeasurePolicy::new(0),
        Err(LayoutError::InvalidRowCount { rows: 0 })
    );
}

#[test]
fn invalid_constraints_are_rejected_before_measuring() {
    let probes = Probes::uniform(2, 10.0, 10.0);
    let inverted = Constraints {
        min_width: 50.0,
        max_width: 10.0,
        min_height: 0.0,
        max_height: 10.0,
    };

    let result = staggered_grid_layout(&probes.measurables, inverted, 2);

    assert!(matches!(
        result,
        Err(LayoutError::InvalidConstraints { axis: "width", .. })
    ));
    assert_eq!(probes.counts[0].get(), 0);
}

#[test]
fn every_child_measured_once_and_placed_once_in_order() {
    let probes = Probes::uniform(7, 10.0, 10.0);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(500.0, 500.0), 3).unwrap();

    assert!(probes.counts.iter().all(|count| count.get() == 1));
    let ids: Vec<NodeId> = result.placements.iter().map(|p| p.node_id).collect();
    assert_eq!(ids, (100..107).collect::<Vec<_>>());
    let placed: Vec<(f32, f32)> = result.placements.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(probes.placed(), placed);
}

#[test]
fn constraints_are_passed_to_children_unmodified() {
    let probes = Probes::uniform(4, 10.0, 10.0);
    let constraints = Constraints {
        min_width: 5.0,
        max_width: 300.0,
        min_height: 7.0,
        max_height: 200.0,
    };

    staggered_grid_layout(&probes.measurables, constraints, 2).unwrap();

    assert_eq!(*probes.received.borrow(), vec![constraints; 4]);
}

#[test]
fn seven_children_three_rows_round_robin() {
    let probes = Probes::new(&[
        (10.0, 10.0),
        (20.0, 20.0),
        (30.0, 30.0),
        (40.0, 10.0),
        (50.0, 20.0),
        (60.0, 30.0),
        (70.0, 10.0),
    ]);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(1000.0, 1000.0), 3).unwrap();

    assert_eq!(row_of_each_child(&result), vec![0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(
        probes.placed(),
        vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (0.0, 30.0),
            (10.0, 0.0),
            (20.0, 10.0),
            (30.0, 30.0),
            (50.0, 0.0),
        ]
    );
    // Row widths: 10+40+70, 20+50, 30+60.
    assert_eq!(result.size, Size::new(120.0, 60.0));
}

#[test]
fn height_is_sum_of_row_maxima() {
    let probes = Probes::new(&[
        (10.0, 40.0),
        (10.0, 55.0),
        (10.0, 20.0),
        (10.0, 12.0),
        (10.0, 30.0),
    ]);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(1000.0, 1000.0), 3).unwrap();

    assert_eq!(result.size.height, 115.0);
    let tops: Vec<f32> = result.placements.iter().map(|p| p.y).collect();
    assert_eq!(tops, vec![0.0, 40.0, 95.0, 0.0, 40.0]);
}

#[test]
fn size_is_clamped_to_constraints() {
    let probes = Probes::uniform(6, 50.0, 40.0);

    let capped =
        staggered_grid_layout(&probes.measurables, Constraints::loose(80.0, 60.0), 2).unwrap();
    assert_eq!(capped.size, Size::new(80.0, 60.0));

    let raised = staggered_grid_layout(
        &probes.measurables,
        Constraints {
            min_width: 400.0,
            max_width: 500.0,
            min_height: 100.0,
            max_height: 500.0,
        },
        2,
    )
    .unwrap();
    assert_eq!(raised.size, Size::new(400.0, 100.0));
}

#[test]
fn empty_grid_takes_min_size() {
    let constraints = Constraints {
        min_width: 12.0,
        max_width: 100.0,
        min_height: 8.0,
        max_height: 100.0,
    };

    let result = staggered_grid_layout(&[], constraints, 3).unwrap();

    assert_eq!(result.size, Size::new(12.0, 8.0));
    assert!(result.placements.is_empty());
}

#[test]
fn single_row_lays_children_side_by_side() {
    let probes = Probes::new(&[(10.0, 5.0), (20.0, 15.0), (30.0, 10.0)]);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(1000.0, 1000.0), 1).unwrap();

    assert_eq!(probes.placed(), vec![(0.0, 0.0), (10.0, 0.0), (30.0, 0.0)]);
    assert_eq!(result.size, Size::new(60.0, 15.0));
}

#[test]
fn more_rows_than_children_gives_one_child_per_row() {
    let probes = Probes::new(&[(10.0, 5.0), (20.0, 15.0), (30.0, 10.0)]);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(1000.0, 1000.0), 5).unwrap();

    assert_eq!(probes.placed(), vec![(0.0, 0.0), (0.0, 5.0), (0.0, 20.0)]);
    assert_eq!(result.size, Size::new(30.0, 30.0));
}

#[test]
fn layout_is_idempotent() {
    let probes = Probes::new(&[(33.0, 12.0), (18.0, 40.0), (25.0, 8.0), (70.0, 22.0)]);
    let constraints = Constraints::loose(200.0, 200.0);

    let first = staggered_grid_layout(&probes.measurables, constraints, 2).unwrap();
    let second = staggered_grid_layout(&probes.measurables, constraints, 2).unwrap();

    assert_eq!(first, second);
}

#[test]
fn nineteen_topics_in_three_rows() {
    let probes = Probes::uniform(19, 100.0, 44.0);

    let result =
        staggered_grid_layout(&probes.measurables, Constraints::loose(f32::INFINITY, 1000.0), 3)
            .unwrap();

    let rows = row_of_each_child(&result);
    let members = |row: usize| -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, r)| **r == row)
            .map(|(index, _)| index)
            .collect()
    };
    assert_eq!(members(0), (0..19).step_by(3).collect::<Vec<_>>());
    assert_eq!(members(1), (1..19).step_by(3).collect::<Vec<_>>());
    assert_eq!(members(2), (2..19).step_by(3).collect::<Vec<_>>());
    // Row 0 holds seven chips, rows 1 and 2 hold six each.
    assert_eq!(result.size, Size::new(700.0, 132.0));
}

#[test]
fn policy_matches_free_function() {
    let probes = Probes::uniform(5, 30.0, 10.0);
    let constraints = Constraints::loose(300.0, 300.0);
    let policy = StaggeredGridMeasurePolicy::new(2).unwrap();

    let from_policy = policy.measure(&probes.measurables, constraints);
    let from_function = staggered_grid_layout(&probes.measurables, constraints, 2).unwrap();

    assert_eq!(from_policy, from_function);
    assert_eq!(policy.rows(), 2);
}

#[test]
fn intrinsics_follow_row_aggregation() {
    let probes = Probes::new(&[(10.0, 40.0), (20.0, 10.0), (30.0, 20.0), (40.0, 30.0)]);
    let policy = StaggeredGridMeasurePolicy::new(2).unwrap();

    // Rows {0, 2} and {1, 3}.
    assert_eq!(policy.max_intrinsic_width(&probes.measurables, 0.0), 60.0);
    assert_eq!(policy.min_intrinsic_width(&probes.measurables, 0.0), 30.0);
    assert_eq!(policy.max_intrinsic_height(&probes.measurables, 0.0), 70.0);
    assert_eq!(policy.min_intrinsic_height(&probes.measurables, 0.0), 35.0);
    assert!(probes.counts.iter().all(|count| count.get() == 0));
}
