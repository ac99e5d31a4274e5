//! Core measurement algorithm for lazy lists.
//!
//! Decides which items to measure from the scroll position and viewport size,
//! measures each of them at most once, positions them along the main axis and
//! writes the resolved position back into [`LazyListState`].

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashMap;

use super::lazy_list_measured_item::{LazyListMeasureResult, LazyListMeasuredItem};
use super::lazy_list_state::{LazyListLayoutInfo, LazyListState};

/// Configuration for lazy list measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyListMeasureConfig {
    /// Content padding before the first item.
    pub before_content_padding: f32,

    /// Content padding after the last item.
    pub after_content_padding: f32,

    /// Spacing between items.
    pub spacing: f32,

    /// Number of items to keep measured beyond each edge of the viewport.
    pub beyond_bounds_item_count: usize,
}

impl Default for LazyListMeasureConfig {
    fn default() -> Self {
        Self {
            before_content_padding: 0.0,
            after_content_padding: 0.0,
            spacing: 0.0,
            beyond_bounds_item_count: 2,
        }
    }
}

impl LazyListMeasureConfig {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_content_padding(mut self, before: f32, after: f32) -> Self {
        self.before_content_padding = before.max(0.0);
        self.after_content_padding = after.max(0.0);
        self
    }

    pub fn with_beyond_bounds_item_count(mut self, count: usize) -> Self {
        self.beyond_bounds_item_count = count;
        self
    }
}

/// Memoizes item measurements so one pass never measures an index twice.
struct MeasurePass<'a, F>
where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    state: &'a LazyListState,
    measure_item: &'a mut F,
    measured: FxHashMap<usize, LazyListMeasuredItem>,
}

impl<'a, F> MeasurePass<'a, F>
where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    fn measure(&mut self, index: usize) -> LazyListMeasuredItem {
        if let Some(item) = self.measured.get(&index) {
            return item.clone();
        }
        let mut item = (self.measure_item)(index);
        item.index = index;
        item.offset = 0.0;
        self.state.cache_item_size(index, item.main_axis_size);
        self.measured.insert(index, item.clone());
        item
    }

    fn size_of(&mut self, index: usize) -> f32 {
        self.measure(index).main_axis_size
    }
}

/// Measures a lazy list and returns the items to place.
///
/// 1. Consume a pending `scroll_to_item` request, or apply the pending scroll delta
/// 2. Normalize the position so the first item is the one crossing the viewport start
/// 3. Measure items forward until the viewport end
/// 4. Clamp at the end so the last item never leaves blank space behind it
/// 5. Add the beyond-bounds buffer and write the result back to `state`
///
/// `measure_item` is called at most once per index per pass.
pub fn measure_lazy_list<F>(
    items_count: usize,
    state: &LazyListState,
    viewport_size: f32,
    config: &LazyListMeasureConfig,
    mut measure_item: F,
) -> LazyListMeasureResult
where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    let before = config.before_content_padding;
    let after = config.after_content_padding;
    let spacing = config.spacing;

    if items_count == 0 {
        state.consume_scroll_to_index();
        state.consume_scroll_delta();
        state.update_scroll_position(0, 0.0);
        state.update_after_measure(
            LazyListLayoutInfo {
                viewport_size,
                before_content_padding: before,
                after_content_padding: after,
                spacing,
                ..LazyListLayoutInfo::default()
            },
            false,
            false,
        );
        return LazyListMeasureResult {
            viewport_size,
            total_content_size: before + after,
            ..LazyListMeasureResult::default()
        };
    }

    // Collapsed viewport: nothing to show, keep the scroll position for later.
    if viewport_size <= 0.0 {
        return LazyListMeasureResult::default();
    }

    let mut pass = MeasurePass {
        state,
        measure_item: &mut measure_item,
        measured: FxHashMap::default(),
    };

    let (mut first_index, mut first_offset) = match state.consume_scroll_to_index() {
        Some(requested) => {
            state.consume_scroll_delta();
            requested
        }
        None => (
            state.first_visible_item_index(),
            state.first_visible_item_scroll_offset() + state.consume_scroll_delta(),
        ),
    };
    first_index = first_index.min(items_count - 1);

    while first_offset < 0.0 && first_index > 0 {
        first_index -= 1;
        first_offset += pass.size_of(first_index) + spacing;
    }
    first_offset = first_offset.max(0.0);

    while first_index + 1 < items_count {
        let extent = pass.size_of(first_index) + spacing;
        if first_offset < extent {
            break;
        }
        first_offset -= extent;
        first_index += 1;
    }

    let viewport_end = viewport_size - after;
    let mut items: VecDeque<LazyListMeasuredItem> = VecDeque::new();
    let mut cursor = before - first_offset;
    let mut index = first_index;
    loop {
        let mut item = pass.measure(index);
        item.offset = cursor;
        cursor = item.end() + spacing;
        items.push_back(item);
        index += 1;
        if index >= items_count || cursor >= viewport_end {
            break;
        }
    }

    clamp_to_end(&mut items, &mut pass, items_count, before, viewport_end, spacing);

    let first_visible = items
        .iter()
        .find(|item| item_end_with_spacing(item, items_count, spacing) > before)
        .or(items.front())
        .map(|item| (item.index, (before - item.offset).max(0.0)))
        .unwrap_or((0, 0.0));

    let last_visible = items
        .iter()
        .rev()
        .find(|item| item.offset < viewport_end)
        .or(items.back())
        .cloned();

    for _ in 0..config.beyond_bounds_item_count {
        let Some(front) = items.front() else { break };
        if front.index == 0 {
            break;
        }
        let front_offset = front.offset;
        let mut previous = pass.measure(front.index - 1);
        previous.offset = front_offset - spacing - previous.main_axis_size;
        items.push_front(previous);
    }
    for _ in 0..config.beyond_bounds_item_count {
        let Some(back) = items.back() else { break };
        if back.index + 1 >= items_count {
            break;
        }
        let next_offset = back.end() + spacing;
        let mut next = pass.measure(back.index + 1);
        next.offset = next_offset;
        items.push_back(next);
    }

    let visible_items: Vec<LazyListMeasuredItem> = items.into_iter().collect();
    let visible_items_info = visible_items
        .iter()
        .filter(|item| item.end() > before && item.offset < viewport_end)
        .map(LazyListMeasuredItem::to_item_info)
        .collect();

    let total_content_size =
        before + state.estimated_offset_of(items_count, spacing) - spacing + after;
    let cross_axis_size = visible_items
        .iter()
        .map(|item| item.cross_axis_size)
        .fold(0.0, f32::max);

    let (first_visible_item_index, first_visible_item_scroll_offset) = first_visible;
    let can_scroll_backward =
        first_visible_item_index > 0 || first_visible_item_scroll_offset > 0.0;
    let can_scroll_forward = last_visible
        .map(|last| last.index + 1 < items_count || last.end() > viewport_end)
        .unwrap_or(false);

    trace!(
        "lazy list: first={first_visible_item_index}+{first_visible_item_scroll_offset} measured={} content={total_content_size}",
        visible_items.len()
    );

    state.update_scroll_position(first_visible_item_index, first_visible_item_scroll_offset);
    state.update_after_measure(
        LazyListLayoutInfo {
            visible_items_info,
            total_items_count: items_count,
            viewport_size,
            before_content_padding: before,
            after_content_padding: after,
            spacing,
        },
        can_scroll_forward,
        can_scroll_backward,
    );

    LazyListMeasureResult {
        visible_items,
        first_visible_item_index,
        first_visible_item_scroll_offset,
        viewport_size,
        total_content_size,
        cross_axis_size,
        can_scroll_forward,
        can_scroll_backward,
    }
}

fn item_end_with_spacing(item: &LazyListMeasuredItem, items_count: usize, spacing: f32) -> f32 {
    if item.index + 1 < items_count {
        item.end() + spacing
    } else {
        item.end()
    }
}

/// Shifts items down when the last item ends before the viewport end, filling
/// the space above with earlier items; never pushes item 0 below the start padding.
fn clamp_to_end<F>(
    items: &mut VecDeque<LazyListMeasuredItem>,
    pass: &mut MeasurePass<'_, F>,
    items_count: usize,
    before: f32,
    viewport_end: f32,
    spacing: f32,
) where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    let gap = match items.back() {
        Some(last) if last.index + 1 == items_count => viewport_end - last.end(),
        _ => return,
    };
    if gap <= 0.0 {
        return;
    }

    for item in items.iter_mut() {
        item.offset += gap;
    }

    while let Some(front) = items.front() {
        if front.offset <= before || front.index == 0 {
            break;
        }
        let front_offset = front.offset;
        let mut previous = pass.measure(front.index - 1);
        previous.offset = front_offset - spacing - previous.main_axis_size;
        items.push_front(previous);
    }

    if let Some(overshoot) = items.front().map(|front| front.offset - before) {
        if overshoot > 0.0 {
            for item in items.iter_mut() {
                item.offset -= overshoot;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lazy_list_measure_tests.rs"]
mod tests;
