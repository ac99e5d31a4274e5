//! Smooth scrolling driven by the animation scheduler.

use log::debug;

use composelab_animation::{
    AnimationHandle, AnimationKey, AnimationScheduler, AnimationSpec, TweenTask,
};

use super::lazy_list_state::LazyListState;
use crate::scroll::ScrollState;

/// Animates `state` towards `index` and snaps exactly onto it when the tween completes.
///
/// The distance is estimated from cached item sizes (the running average for
/// items never measured), so the tween feeds `scroll_by` deltas and the final
/// `scroll_to_item` corrects any estimation error. A new scroll animation on
/// the same list cancels this one; a cancelled animation leaves the list where
/// it stopped.
pub fn animate_scroll_to_item(
    scheduler: &AnimationScheduler,
    state: &LazyListState,
    index: usize,
    spec: AnimationSpec,
) -> AnimationHandle {
    let spacing = state.layout_info().spacing;
    let current = state.estimated_offset_of(state.first_visible_item_index(), spacing)
        + state.first_visible_item_scroll_offset();
    let target = state.estimated_offset_of(index, spacing);
    let distance = target - current;
    debug!("animate_scroll_to_item({index}): estimated distance {distance}");

    let scrolling = state.clone();
    let mut applied = 0.0_f32;
    let snapping = state.clone();
    let tween = TweenTask::new(0.0, distance, spec, move |value| {
        scrolling.scroll_by(value - applied);
        applied = value;
    })
    .on_end(move |completed| {
        if completed {
            snapping.scroll_to_item(index, 0.0);
        }
    });

    scheduler.launch_keyed(AnimationKey(state.identity() as u64), tween)
}

/// Animates a plain [`ScrollState`] to `value`.
pub fn animate_scroll_to(
    scheduler: &AnimationScheduler,
    state: &ScrollState,
    value: f32,
    spec: AnimationSpec,
) -> AnimationHandle {
    let start = state.value();
    let target = value.clamp(0.0, state.max_value());
    debug!("animate_scroll_to({value}) from {start}");
    let scrolling = state.clone();
    let tween = TweenTask::new(start, target, spec, move |value| scrolling.scroll_to(value));
    scheduler.launch_keyed(AnimationKey(state.identity() as u64), tween)
}

#[cfg(test)]
#[path = "tests/animated_scroll_tests.rs"]
mod tests;
