use std::cell::Cell;
use std::rc::Rc;

use composelab_animation::{AnimationSpec, TweenTask};

use super::*;

#[test]
fn simulated_clock_steps_one_interval_per_frame() {
    let mut clock = FrameClock::simulated();
    assert_eq!(clock.next_frame_nanos(), FRAME_INTERVAL_NANOS);
    assert_eq!(clock.next_frame_nanos(), 2 * FRAME_INTERVAL_NANOS);
    assert_eq!(clock.frames(), 2);
}

#[test]
fn realtime_clock_is_monotonic() {
    let mut clock = FrameClock::realtime();
    let first = clock.next_frame_nanos();
    let second = clock.next_frame_nanos();
    assert!(first >= FRAME_INTERVAL_NANOS);
    assert!(second > first);
}

#[test]
fn runs_until_the_tween_finishes() {
    let scheduler = AnimationScheduler::new();
    let value = Rc::new(Cell::new(0.0_f32));
    let sink = value.clone();
    scheduler.launch(TweenTask::new(
        0.0,
        100.0,
        AnimationSpec::linear(100),
        move |v| sink.set(v),
    ));

    let mut clock = FrameClock::simulated();
    let mut seen = 0;
    let frames = run_until_idle(&scheduler, &mut clock, 100, |_| {
        seen += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(frames, seen);
    // 100 ms is six frames plus a partial seventh at 60 Hz.
    assert_eq!(frames, 7);
    assert_eq!(value.get(), 100.0);
    assert!(!scheduler.has_active_tasks());
}

#[test]
fn stops_at_the_frame_limit() {
    let scheduler = AnimationScheduler::new();
    scheduler.launch(TweenTask::new(0.0, 1.0, AnimationSpec::linear(10_000), |_| {}));

    let mut clock = FrameClock::simulated();
    let frames = run_until_idle(&scheduler, &mut clock, 3, |_| Ok(())).unwrap();

    assert_eq!(frames, 3);
    assert!(scheduler.has_active_tasks());
}

#[test]
fn frame_callback_errors_stop_the_loop() {
    let scheduler = AnimationScheduler::new();
    scheduler.launch(TweenTask::new(0.0, 1.0, AnimationSpec::linear(1_000), |_| {}));

    let mut clock = FrameClock::simulated();
    let err = run_until_idle(&scheduler, &mut clock, 10, |_| anyhow::bail!("layout failed"))
        .unwrap_err();

    assert_eq!(err.to_string(), "layout failed");
    assert_eq!(clock.frames(), 1);
}
