//! Animation system for composelab
//!
//! Time-based tweens with easing curves, driven by an explicit
//! single-threaded [`AnimationScheduler`]. The host pumps the scheduler once
//! per frame with a monotonic timestamp; every launched task hands back an
//! [`AnimationHandle`] that can cancel it.

mod easing;
mod scheduler;
mod tween;

pub use easing::*;
pub use scheduler::*;
pub use tween::*;

/// Nanoseconds per millisecond, the unit conversion used by frame timestamps.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Frame interval of a 60 Hz display in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
