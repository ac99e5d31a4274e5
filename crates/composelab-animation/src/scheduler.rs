//! Single-threaded animation scheduler.
//!
//! Tasks are queued on the UI thread and advanced by [`AnimationScheduler::tick`]
//! once per frame. Nothing here spawns threads or blocks; a task that wants to
//! stop simply reports [`TaskStatus::Finished`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, trace};
use smallvec::SmallVec;

/// What a task wants after processing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Finished,
}

/// Unit of frame-driven work.
pub trait AnimationTask {
    /// Advances the task to `frame_time_nanos`.
    fn on_frame(&mut self, frame_time_nanos: u64) -> TaskStatus;

    /// Called once if the task is cancelled before finishing.
    fn on_cancel(&mut self) {}
}

/// Groups tasks that must not run concurrently, e.g. all scroll animations of one list.
///
/// Launching a task with a key cancels any active task holding the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationKey(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Active,
    Finished,
    Cancelled,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("frame time went backwards: last frame at {last}ns, got {now}ns")]
    NonMonotonicFrameTime { last: u64, now: u64 },
}

/// Cancel handle returned by [`AnimationScheduler::launch`].
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    id: u64,
    state: Rc<Cell<TaskState>>,
}

impl AnimationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> TaskState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get() == TaskState::Active
    }

    /// Cancels the task; it is dropped on the next tick. No-op once finished.
    pub fn cancel(&self) {
        if self.is_active() {
            debug!("animation {} cancelled", self.id);
            self.state.set(TaskState::Cancelled);
        }
    }
}

struct ScheduledTask {
    id: u64,
    key: Option<AnimationKey>,
    state: Rc<Cell<TaskState>>,
    task: Box<dyn AnimationTask>,
}

#[derive(Default)]
struct SchedulerInner {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
    last_frame_nanos: Option<u64>,
}

/// Cheap-to-clone handle to the UI thread's animation queue.
#[derive(Clone, Default)]
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task`; it receives its first frame on the next [`tick`](Self::tick).
    pub fn launch(&self, task: impl AnimationTask + 'static) -> AnimationHandle {
        self.launch_inner(None, Box::new(task))
    }

    /// Queues `task` after cancelling every active task launched with `key`.
    pub fn launch_keyed(
        &self,
        key: AnimationKey,
        task: impl AnimationTask + 'static,
    ) -> AnimationHandle {
        self.launch_inner(Some(key), Box::new(task))
    }

    fn launch_inner(
        &self,
        key: Option<AnimationKey>,
        task: Box<dyn AnimationTask>,
    ) -> AnimationHandle {
        let mut inner = self.inner.borrow_mut();
        if let Some(key) = key {
            for existing in inner.tasks.iter().filter(|t| t.key == Some(key)) {
                if existing.state.get() == TaskState::Active {
                    debug!("animation {} superseded by new task on {:?}", existing.id, key);
                    existing.state.set(TaskState::Cancelled);
                }
            }
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let state = Rc::new(Cell::new(TaskState::Active));
        inner.tasks.push(ScheduledTask {
            id,
            key,
            state: Rc::clone(&state),
            task,
        });
        debug!("animation {id} launched");
        AnimationHandle { id, state }
    }

    /// Number of tasks still queued, including cancelled ones not yet swept.
    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// True while any queued task is still active.
    pub fn has_active_tasks(&self) -> bool {
        self.inner
            .borrow()
            .tasks
            .iter()
            .any(|task| task.state.get() == TaskState::Active)
    }

    /// Advances every active task to `frame_time_nanos` and sweeps finished ones.
    ///
    /// Returns how many tasks remain active afterwards. Tasks may launch new
    /// tasks from inside `on_frame`; those start on the following tick.
    pub fn tick(&self, frame_time_nanos: u64) -> Result<usize, AnimationError> {
        let mut running = {
            let mut inner = self.inner.borrow_mut();
            if let Some(last) = inner.last_frame_nanos {
                if frame_time_nanos < last {
                    return Err(AnimationError::NonMonotonicFrameTime {
                        last,
                        now: frame_time_nanos,
                    });
                }
            }
            inner.last_frame_nanos = Some(frame_time_nanos);
            std::mem::take(&mut inner.tasks)
        };

        let mut retired: SmallVec<[u64; 4]> = SmallVec::new();
        running.retain_mut(|scheduled| {
            if scheduled.state.get() == TaskState::Cancelled {
                scheduled.task.on_cancel();
                retired.push(scheduled.id);
                return false;
            }
            match scheduled.task.on_frame(frame_time_nanos) {
                TaskStatus::Running => {
                    // on_frame may have cancelled its own handle.
                    if scheduled.state.get() == TaskState::Cancelled {
                        scheduled.task.on_cancel();
                        retired.push(scheduled.id);
                        return false;
                    }
                    true
                }
                TaskStatus::Finished => {
                    scheduled.state.set(TaskState::Finished);
                    retired.push(scheduled.id);
                    false
                }
            }
        });

        if !retired.is_empty() {
            trace!("retired animations {:?} at {frame_time_nanos}ns", retired);
        }

        let mut inner = self.inner.borrow_mut();
        let launched_during_tick = std::mem::take(&mut inner.tasks);
        for key in launched_during_tick.iter().filter_map(|task| task.key) {
            for older in running.iter().filter(|task| task.key == Some(key)) {
                if older.state.get() == TaskState::Active {
                    older.state.set(TaskState::Cancelled);
                }
            }
        }
        running.extend(launched_during_tick);
        inner.tasks = running;
        Ok(inner
            .tasks
            .iter()
            .filter(|task| task.state.get() == TaskState::Active)
            .count())
    }

    /// Cancels every queued task.
    pub fn cancel_all(&self) {
        for task in self.inner.borrow().tasks.iter() {
            if task.state.get() == TaskState::Active {
                task.state.set(TaskState::Cancelled);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
