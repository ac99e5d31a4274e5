#![allow(non_snake_case)]

use composelab_ui_layout::Alignment;

use super::layout::Layout;
use crate::layout::policies::BoxMeasurePolicy;
use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpec {
    pub alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl BoxSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn propagate_min_constraints(mut self, propagate: bool) -> Self {
        self.propagate_min_constraints = propagate;
        self
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            alignment: Alignment::TOP_START,
            propagate_min_constraints: false,
        }
    }
}

/// Overlays its children, aligned within the box.
pub fn BoxLayout<F>(ui: &mut UiTreeBuilder, modifier: Modifier, spec: BoxSpec, content: F) -> UiNode
where
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    let policy = BoxMeasurePolicy::new(spec.alignment, spec.propagate_min_constraints);
    Layout(ui, modifier, NodeKind::Layout, policy, content)
}
