//! Frame timestamps for pumping the animation scheduler.

use std::time::Duration;

use composelab_animation::{AnimationScheduler, FRAME_INTERVAL_NANOS};
use log::trace;
use web_time::Instant;

/// Source of monotonic 60 Hz frame timestamps, in nanoseconds since the clock started.
#[derive(Debug, Clone)]
pub enum FrameClock {
    /// Waits out each frame interval against the wall clock.
    Realtime { origin: Instant, frame: u64 },
    /// Steps exactly one frame interval per call without waiting.
    Simulated { frame: u64 },
}

impl FrameClock {
    pub fn realtime() -> Self {
        Self::Realtime {
            origin: Instant::now(),
            frame: 0,
        }
    }

    pub fn simulated() -> Self {
        Self::Simulated { frame: 0 }
    }

    pub fn frames(&self) -> u64 {
        match self {
            Self::Realtime { frame, .. } | Self::Simulated { frame } => *frame,
        }
    }

    /// Timestamp of the next frame.
    pub fn next_frame_nanos(&mut self) -> u64 {
        match self {
            Self::Realtime { origin, frame } => {
                *frame += 1;
                let deadline = Duration::from_nanos(*frame * FRAME_INTERVAL_NANOS);
                let elapsed = origin.elapsed();
                if let Some(remaining) = deadline.checked_sub(elapsed) {
                    std::thread::sleep(remaining);
                }
                origin.elapsed().as_nanos() as u64
            }
            Self::Simulated { frame } => {
                *frame += 1;
                *frame * FRAME_INTERVAL_NANOS
            }
        }
    }
}

/// Ticks `scheduler` until no animation is active or `max_frames` ran out.
///
/// `on_frame` runs after every tick, which is where the host re-measures.
/// Returns the number of frames pumped.
pub fn run_until_idle<F>(
    scheduler: &AnimationScheduler,
    clock: &mut FrameClock,
    max_frames: usize,
    mut on_frame: F,
) -> anyhow::Result<usize>
where
    F: FnMut(u64) -> anyhow::Result<()>,
{
    let mut frames = 0;
    while scheduler.has_active_tasks() && frames < max_frames {
        let now = clock.next_frame_nanos();
        let active = scheduler.tick(now)?;
        on_frame(now)?;
        frames += 1;
        trace!("frame {frames} at {now}ns, {active} animations active");
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
