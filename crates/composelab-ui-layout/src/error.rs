//! Errors surfaced by layout configuration and layout passes.

use crate::core::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A staggered grid was configured with no rows.
    #[error("staggered grid needs at least one row, got {rows}")]
    InvalidRowCount { rows: usize },

    /// A min bound exceeds its max bound, or a bound is NaN.
    #[error("invalid {axis} constraints: min {min} > max {max}")]
    InvalidConstraints {
        axis: &'static str,
        min: f32,
        max: f32,
    },

    /// A lookup referenced a node that is not part of the tree.
    #[error("node {id} is not part of the layout tree")]
    UnknownNode { id: NodeId },
}
