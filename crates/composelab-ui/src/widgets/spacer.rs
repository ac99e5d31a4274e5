#![allow(non_snake_case)]

use crate::layout::policies::LeafMeasurePolicy;
use crate::modifier::{Modifier, Size};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Empty node of the given size.
pub fn Spacer(ui: &mut UiTreeBuilder, size: Size) -> UiNode {
    ui.node(
        Modifier::empty(),
        NodeKind::Spacer,
        LeafMeasurePolicy::new(size),
        vec![],
    )
}
