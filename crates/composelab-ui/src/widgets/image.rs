#![allow(non_snake_case)]

use crate::layout::policies::LeafMeasurePolicy;
use crate::modifier::{Modifier, Size};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Placeholder for an image of `size`; the pixels come from the host.
pub fn Image(
    ui: &mut UiTreeBuilder,
    description: impl Into<String>,
    size: Size,
    modifier: Modifier,
) -> UiNode {
    ui.node(
        modifier,
        NodeKind::Image {
            description: description.into(),
        },
        LeafMeasurePolicy::new(size),
        vec![],
    )
}
