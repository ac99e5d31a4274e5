//! Generic Layout widget every other widget is built on.

#![allow(non_snake_case)]

use composelab_ui_layout::MeasurePolicy;

use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Builds the children with `content`, then a node measuring them with `policy`.
pub fn Layout<P, F>(
    ui: &mut UiTreeBuilder,
    modifier: Modifier,
    kind: NodeKind,
    policy: P,
    content: F,
) -> UiNode
where
    P: MeasurePolicy + 'static,
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    let children = content(ui);
    ui.node(modifier, kind, policy, children)
}
