//! Lazy list state management.
//!
//! [`LazyListState`] is the handle a list and its callers share: buttons
//! request scrolls through it, the measure pass consumes those requests and
//! writes back the resolved position and layout info.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rustc_hash::FxHashMap;

use super::DEFAULT_ITEM_SIZE_ESTIMATE;

/// Position and size of one item as seen by the last measure pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyListItemInfo {
    pub index: usize,
    /// Offset of the item's leading edge from the viewport start.
    pub offset: f32,
    pub size: f32,
}

/// Snapshot of the last measure pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LazyListLayoutInfo {
    /// Items intersecting the viewport, in index order.
    pub visible_items_info: Vec<LazyListItemInfo>,
    pub total_items_count: usize,
    pub viewport_size: f32,
    pub before_content_padding: f32,
    pub after_content_padding: f32,
    /// Gap between neighbouring items.
    pub spacing: f32,
}

struct LazyListStateInner {
    first_visible_item_index: usize,
    first_visible_item_scroll_offset: f32,

    /// Scroll delta to be consumed in the next layout pass.
    scroll_to_be_consumed: f32,

    /// Pending scroll-to-item request, consumed by the next layout pass.
    pending_scroll_to_index: Option<(usize, f32)>,

    can_scroll_forward: bool,
    can_scroll_backward: bool,
    /// Scroll bounds are unknown until the first measure pass.
    has_measured: bool,

    layout_info: LazyListLayoutInfo,

    /// Main-axis sizes of every item measured so far (index -> size).
    item_size_cache: FxHashMap<usize, f32>,
    /// Sum of the values in `item_size_cache`.
    cached_size_total: f64,
    average_item_size: f32,
}

/// Scroll position of a lazy list plus the caches the measure pass keeps.
///
/// Clones share state, so a button callback and the list policy can each hold one.
#[derive(Clone)]
pub struct LazyListState {
    inner: Rc<RefCell<LazyListStateInner>>,
}

impl PartialEq for LazyListState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for LazyListState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LazyListState")
            .field("first_visible_item_index", &inner.first_visible_item_index)
            .field(
                "first_visible_item_scroll_offset",
                &inner.first_visible_item_scroll_offset,
            )
            .field("pending_scroll_to_index", &inner.pending_scroll_to_index)
            .finish()
    }
}

impl Default for LazyListState {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyListState {
    pub fn new() -> Self {
        Self::with_position(0, 0.0)
    }

    pub fn with_position(
        first_visible_item_index: usize,
        first_visible_item_scroll_offset: f32,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LazyListStateInner {
                first_visible_item_index,
                first_visible_item_scroll_offset,
                scroll_to_be_consumed: 0.0,
                pending_scroll_to_index: None,
                can_scroll_forward: false,
                can_scroll_backward: false,
                has_measured: false,
                layout_info: LazyListLayoutInfo::default(),
                item_size_cache: FxHashMap::default(),
                cached_size_total: 0.0,
                average_item_size: DEFAULT_ITEM_SIZE_ESTIMATE,
            })),
        }
    }

    pub fn first_visible_item_index(&self) -> usize {
        self.inner.borrow().first_visible_item_index
    }

    /// How far the first visible item is scrolled past the viewport start.
    pub fn first_visible_item_scroll_offset(&self) -> f32 {
        self.inner.borrow().first_visible_item_scroll_offset
    }

    /// Stable identity shared by every clone of this state.
    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    pub fn layout_info(&self) -> LazyListLayoutInfo {
        self.inner.borrow().layout_info.clone()
    }

    pub fn can_scroll_forward(&self) -> bool {
        self.inner.borrow().can_scroll_forward
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.inner.borrow().can_scroll_backward
    }

    /// Requests an instant jump; takes effect on the next measure pass.
    pub fn scroll_to_item(&self, index: usize, scroll_offset: f32) {
        debug!("scroll_to_item({index}, {scroll_offset})");
        let mut inner = self.inner.borrow_mut();
        inner.pending_scroll_to_index = Some((index, scroll_offset));
        inner.scroll_to_be_consumed = 0.0;
        inner.first_visible_item_index = index;
        inner.first_visible_item_scroll_offset = scroll_offset;
    }

    /// Queues a scroll of `delta` pixels (positive towards the end).
    ///
    /// Returns the delta accepted now: nothing when the last measure pass found
    /// the list pinned at the edge the delta points to, the full delta
    /// otherwise. The measure pass clamps any overshoot.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let mut inner = self.inner.borrow_mut();
        let blocked = inner.has_measured
            && ((delta > 0.0 && !inner.can_scroll_forward)
                || (delta < 0.0 && !inner.can_scroll_backward));
        if blocked {
            return 0.0;
        }
        inner.scroll_to_be_consumed += delta;
        delta
    }

    /// Scroll delta queued for the next measure pass.
    pub fn pending_scroll_delta(&self) -> f32 {
        self.inner.borrow().scroll_to_be_consumed
    }

    pub(crate) fn consume_scroll_delta(&self) -> f32 {
        std::mem::take(&mut self.inner.borrow_mut().scroll_to_be_consumed)
    }

    pub(crate) fn consume_scroll_to_index(&self) -> Option<(usize, f32)> {
        self.inner.borrow_mut().pending_scroll_to_index.take()
    }

    /// Records the measured main-axis size of `index` for later estimates.
    pub fn cache_item_size(&self, index: usize, size: f32) {
        let mut inner = self.inner.borrow_mut();
        let previous = inner.item_size_cache.insert(index, size).unwrap_or(0.0);
        inner.cached_size_total += f64::from(size) - f64::from(previous);
        let count = inner.item_size_cache.len() as f64;
        inner.average_item_size = (inner.cached_size_total / count) as f32;
    }

    pub fn cached_item_size(&self, index: usize) -> Option<f32> {
        self.inner.borrow().item_size_cache.get(&index).copied()
    }

    /// Average of every cached item size, or the default estimate before any measurement.
    pub fn average_item_size(&self) -> f32 {
        self.inner.borrow().average_item_size
    }

    /// Estimated distance from the start of item 0 to the start of `index`.
    pub fn estimated_offset_of(&self, index: usize, spacing: f32) -> f32 {
        let inner = self.inner.borrow();
        (0..index)
            .map(|i| {
                inner
                    .item_size_cache
                    .get(&i)
                    .copied()
                    .unwrap_or(inner.average_item_size)
                    + spacing
            })
            .sum()
    }

    pub(crate) fn update_scroll_position(&self, index: usize, offset: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.first_visible_item_index = index;
        inner.first_visible_item_scroll_offset = offset;
    }

    pub(crate) fn update_after_measure(
        &self,
        layout_info: LazyListLayoutInfo,
        can_scroll_forward: bool,
        can_scroll_backward: bool,
    ) {
        let mut inner = self.inner.borrow_mut();
        inner.layout_info = layout_info;
        inner.can_scroll_forward = can_scroll_forward;
        inner.can_scroll_backward = can_scroll_backward;
        inner.has_measured = true;
    }
}

#[cfg(test)]
#[path = "tests/lazy_list_state_tests.rs"]
mod tests;
