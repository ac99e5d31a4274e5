//! Staggered grid: children dealt round-robin into a fixed number of rows.
//!
//! Child `i` lands in row `i % rows`. A row is as wide as the sum of its
//! children and as tall as its tallest child; rows stack top to bottom. Each
//! child is measured exactly once, with the grid's own constraints, and the
//! placement pass only reuses the measured sizes.

use std::num::NonZeroUsize;

use composelab_ui_layout::{
    Constraints, LayoutError, Measurable, MeasurePolicy, MeasureResult, Placeable, Placement,
};
use log::{debug, warn};
use smallvec::{smallvec, SmallVec};

use crate::modifier::Size;

type RowValues = SmallVec<[f32; 8]>;

/// Measures and places `measurables` into `rows` staggered rows.
///
/// `rows == 0` is rejected before any child is measured, as are constraints
/// whose min exceeds their max.
pub fn staggered_grid_layout(
    measurables: &[Box<dyn Measurable>],
    constraints: Constraints,
    rows: usize,
) -> Result<MeasureResult, LayoutError> {
    let rows = checked_rows(rows)?;
    constraints.validate()?;
    Ok(layout_rows(measurables, constraints, rows))
}

fn checked_rows(rows: usize) -> Result<NonZeroUsize, LayoutError> {
    NonZeroUsize::new(rows).ok_or_else(|| {
        warn!("rejecting staggered grid with {rows} rows");
        LayoutError::InvalidRowCount { rows }
    })
}

fn layout_rows(
    measurables: &[Box<dyn Measurable>],
    constraints: Constraints,
    rows: NonZeroUsize,
) -> MeasureResult {
    let rows = rows.get();
    let mut row_widths: RowValues = smallvec![0.0; rows];
    let mut row_heights: RowValues = smallvec![0.0; rows];

    let placeables: Vec<Box<dyn Placeable>> = measurables
        .iter()
        .enumerate()
        .map(|(index, measurable)| {
            let placeable = measurable.measure(constraints);
            let row = index % rows;
            row_widths[row] += placeable.width();
            row_heights[row] = row_heights[row].max(placeable.height());
            placeable
        })
        .collect();

    let content_width = row_widths.iter().copied().fold(0.0, f32::max);
    let content_height: f32 = row_heights.iter().sum();
    let (width, height) = constraints.constrain(content_width, content_height);

    let mut row_y: RowValues = SmallVec::with_capacity(rows);
    let mut y = 0.0;
    for row_height in &row_heights {
        row_y.push(y);
        y += row_height;
    }

    let mut row_x: RowValues = smallvec![0.0; rows];
    let placements = placeables
        .iter()
        .enumerate()
        .map(|(index, placeable)| {
            let row = index % rows;
            let (x, y) = (row_x[row], row_y[row]);
            placeable.place(x, y);
            row_x[row] += placeable.width();
            Placement::new(placeable.node_id(), x, y, 0)
        })
        .collect();

    debug!(
        "staggered grid: {} children in {rows} rows -> {width}x{height}",
        measurables.len()
    );
    MeasureResult::new(Size::new(width, height), placements)
}

/// Measure policy form of [`staggered_grid_layout`] with a validated row count.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggeredGridMeasurePolicy {
    rows: NonZeroUsize,
}

impl StaggeredGridMeasurePolicy {
    pub fn new(rows: usize) -> Result<Self, LayoutError> {
        Ok(Self {
            rows: checked_rows(rows)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    /// Sum per row of `child`, then the largest row.
    fn widest_row(
        &self,
        measurables: &[Box<dyn Measurable>],
        child: impl Fn(&dyn Measurable) -> f32,
    ) -> f32 {
        let rows = self.rows();
        let mut totals: RowValues = smallvec![0.0; rows];
        for (index, measurable) in measurables.iter().enumerate() {
            totals[index % rows] += child(measurable.as_ref());
        }
        totals.into_iter().fold(0.0, f32::max)
    }

    /// Max per row of `child`, then the rows stacked.
    fn stacked_rows(
        &self,
        measurables: &[Box<dyn Measurable>],
        child: impl Fn(&dyn Measurable) -> f32,
    ) -> f32 {
        let rows = self.rows();
        let mut tallest: RowValues = smallvec![0.0; rows];
        for (index, measurable) in measurables.iter().enumerate() {
            let row = index % rows;
            tallest[row] = tallest[row].max(child(measurable.as_ref()));
        }
        tallest.into_iter().sum()
    }
}

impl MeasurePolicy for StaggeredGridMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        layout_rows(measurables, constraints, self.rows)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        self.widest_row(measurables, |m| m.min_intrinsic_width(height))
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        self.widest_row(measurables, |m| m.max_intrinsic_width(height))
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        self.stacked_rows(measurables, |m| m.min_intrinsic_height(width))
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        self.stacked_rows(measurables, |m| m.max_intrinsic_height(width))
    }

    fn debug_name(&self) -> &str {
        "StaggeredGridMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/staggered_grid_tests.rs"]
mod tests;
