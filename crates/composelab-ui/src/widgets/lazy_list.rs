//! LazyColumn: a vertical list that measures only what it shows.

#![allow(non_snake_case)]

use composelab_foundation::{
    measure_lazy_list, LazyListMeasureConfig, LazyListMeasuredItem, LazyListState,
};
use composelab_ui_layout::{
    Constraints, Measurable, MeasurePolicy, MeasureResult, Placeable, Placement,
};
use log::{trace, warn};

use super::Layout;
use crate::modifier::{Modifier, Size};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Measures the window of items around the scroll position held in `state`.
///
/// Items are stacked at x = 0 with loose width and unbounded height. The list
/// needs a bounded height; under an unbounded one it shows nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyColumnMeasurePolicy {
    state: LazyListState,
    config: LazyListMeasureConfig,
}

impl LazyColumnMeasurePolicy {
    pub fn new(state: LazyListState, config: LazyListMeasureConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &LazyListState {
        &self.state
    }
}

impl MeasurePolicy for LazyColumnMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let viewport = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            warn!("LazyColumn measured with unbounded height; no items are shown");
            0.0
        };
        let item_constraints = Constraints {
            min_width: 0.0,
            max_width: constraints.max_width,
            min_height: 0.0,
            max_height: f32::INFINITY,
        };

        let mut placeables: Vec<Option<Box<dyn Placeable>>> =
            measurables.iter().map(|_| None).collect();
        let result = measure_lazy_list(
            measurables.len(),
            &self.state,
            viewport,
            &self.config,
            |index| {
                let placeable = measurables[index].measure(item_constraints);
                let item =
                    LazyListMeasuredItem::new(index, placeable.height(), placeable.width());
                placeables[index] = Some(placeable);
                item
            },
        );

        let placements = result
            .visible_items
            .iter()
            .filter_map(|item| {
                let placeable = placeables[item.index].as_ref()?;
                placeable.place(0.0, item.offset);
                Some(Placement::new(placeable.node_id(), 0.0, item.offset, 0))
            })
            .collect();
        trace!(
            "LazyColumn: first visible {} (+{}), {} of {} items placed in {viewport}px",
            result.first_visible_item_index,
            result.first_visible_item_scroll_offset,
            result.visible_items.len(),
            measurables.len()
        );

        let (width, height) = constraints.constrain(result.cross_axis_size, viewport);
        MeasureResult::new(Size::new(width, height), placements)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.min_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn min_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        0.0
    }

    fn debug_name(&self) -> &str {
        "LazyColumnMeasurePolicy"
    }
}

/// Vertical list of `items_count` items built by `item`.
///
/// Every item subtree is built up front as data; layout measures and places
/// only the items around the position held in `state`.
pub fn LazyColumn<F>(
    ui: &mut UiTreeBuilder,
    state: &LazyListState,
    modifier: Modifier,
    config: LazyListMeasureConfig,
    items_count: usize,
    mut item: F,
) -> UiNode
where
    F: FnMut(&mut UiTreeBuilder, usize) -> UiNode,
{
    let policy = LazyColumnMeasurePolicy::new(state.clone(), config);
    Layout(ui, modifier, NodeKind::LazyList, policy, |ui| {
        (0..items_count).map(|index| item(ui, index)).collect()
    })
}

#[cfg(test)]
#[path = "tests/lazy_list_tests.rs"]
mod tests;
