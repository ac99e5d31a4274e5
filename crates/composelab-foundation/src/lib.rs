//! Foundation building blocks for composelab: scroll state and lazy lists.
//!
//! Everything here is plain state plus pure measurement functions. Widgets in
//! `composelab-ui` wire them into measure policies; the host decides when to
//! re-run layout.

pub mod lazy;
pub mod scroll;

pub use lazy::*;
pub use scroll::*;
