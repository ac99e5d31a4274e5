//! Per-item and per-pass output of lazy list measurement.

use super::lazy_list_state::LazyListItemInfo;

/// One item after measurement, positioned along the main axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyListMeasuredItem {
    pub index: usize,

    /// Height for a column.
    pub main_axis_size: f32,

    pub cross_axis_size: f32,

    /// Offset of the item's leading edge from the viewport start, set during placement.
    pub offset: f32,
}

impl LazyListMeasuredItem {
    pub fn new(index: usize, main_axis_size: f32, cross_axis_size: f32) -> Self {
        Self {
            index,
            main_axis_size,
            cross_axis_size,
            offset: 0.0,
        }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.main_axis_size
    }

    pub fn to_item_info(&self) -> LazyListItemInfo {
        LazyListItemInfo {
            index: self.index,
            offset: self.offset,
            size: self.main_axis_size,
        }
    }
}

/// What one [`measure_lazy_list`](super::measure_lazy_list) pass decided.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LazyListMeasureResult {
    /// Items that were measured and should be placed, in index order.
    /// Includes the beyond-bounds buffer.
    pub visible_items: Vec<LazyListMeasuredItem>,

    pub first_visible_item_index: usize,

    /// How far the first visible item is scrolled past the viewport start.
    pub first_visible_item_scroll_offset: f32,

    pub viewport_size: f32,

    /// Estimated size of the whole content, paddings included.
    pub total_content_size: f32,

    /// Largest cross-axis size among the measured items.
    pub cross_axis_size: f32,

    pub can_scroll_forward: bool,

    pub can_scroll_backward: bool,
}
