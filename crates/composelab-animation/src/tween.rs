//! Tween task: interpolates a float over an [`AnimationSpec`].

use log::trace;

use crate::easing::{AnimationSpec, Lerp};
use crate::scheduler::{AnimationTask, TaskStatus};

/// Drives `update` with interpolated values from `from` to `to`.
///
/// The first frame the task sees becomes its start time, so launching a tween
/// and ticking immediately reports `from` (or `to` for a zero-length spec).
pub struct TweenTask<F>
where
    F: FnMut(f32),
{
    spec: AnimationSpec,
    from: f32,
    to: f32,
    start_nanos: Option<u64>,
    update: F,
    on_end: Option<Box<dyn FnOnce(bool)>>,
}

impl<F> TweenTask<F>
where
    F: FnMut(f32),
{
    pub fn new(from: f32, to: f32, spec: AnimationSpec, update: F) -> Self {
        Self {
            spec,
            from,
            to,
            start_nanos: None,
            update,
            on_end: None,
        }
    }

    /// Registers a callback run once when the tween ends; the flag is true if it
    /// ran to completion and false if it was cancelled.
    pub fn on_end(mut self, callback: impl FnOnce(bool) + 'static) -> Self {
        self.on_end = Some(Box::new(callback));
        self
    }

    fn finish(&mut self, completed: bool) {
        if let Some(callback) = self.on_end.take() {
            callback(completed);
        }
    }
}

impl<F> AnimationTask for TweenTask<F>
where
    F: FnMut(f32),
{
    fn on_frame(&mut self, frame_time_nanos: u64) -> TaskStatus {
        let start = *self.start_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos - start;

        if self.spec.is_finished_at(elapsed) {
            (self.update)(self.to);
            self.finish(true);
            return TaskStatus::Finished;
        }

        let value = self.from.lerp(&self.to, self.spec.progress(elapsed));
        trace!("tween at {elapsed}ns -> {value}");
        (self.update)(value);
        TaskStatus::Running
    }

    fn on_cancel(&mut self) {
        self.finish(false);
    }
}
