//! Headless composelab demo: the staggered grid tutorial screen, measured and
//! scrolled without a window.

#![allow(non_snake_case)]

pub mod config;
pub mod frame_clock;
pub mod screen;

pub use config::{ConfigError, DemoConfig};
pub use frame_clock::{run_until_idle, FrameClock};
pub use screen::{ScrollAction, TopicGrid, TutorialScreen, TutorialState};
