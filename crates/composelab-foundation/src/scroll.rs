//! Scroll offset state for non-lazy scrollable containers.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

#[derive(Debug, Default)]
struct ScrollStateInner {
    value: f32,
    max_value: f32,
}

/// Scroll position of a container that measures all of its content.
///
/// Clones share the same position. The layout pass reports the scrollable
/// range through [`ScrollState::set_max_value`]; every write is clamped to
/// `[0, max_value]`.
#[derive(Clone, Debug)]
pub struct ScrollState {
    inner: Rc<RefCell<ScrollStateInner>>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PartialEq for ScrollState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollState {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScrollStateInner {
                value: initial.max(0.0),
                max_value: f32::INFINITY,
            })),
        }
    }

    /// Stable identity shared by every clone of this state.
    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn max_value(&self) -> f32 {
        self.inner.borrow().max_value
    }

    /// Updates the scrollable range; the current value is re-clamped.
    pub fn set_max_value(&self, max_value: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.max_value = max_value.max(0.0);
        inner.value = inner.value.min(inner.max_value);
    }

    /// Jumps to `value`, clamped to the scrollable range.
    pub fn scroll_to(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.value = value.clamp(0.0, inner.max_value);
    }

    /// Scrolls by `delta` (positive towards the end) and returns the consumed amount.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let mut inner = self.inner.borrow_mut();
        let previous = inner.value;
        inner.value = (previous + delta).clamp(0.0, inner.max_value);
        let consumed = inner.value - previous;
        trace!("scroll_by({delta}) consumed {consumed}");
        consumed
    }

    pub fn can_scroll_forward(&self) -> bool {
        let inner = self.inner.borrow();
        inner.value < inner.max_value
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.inner.borrow().value > 0.0
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
