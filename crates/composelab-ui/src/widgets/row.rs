//! Row widget implementation

#![allow(non_snake_case)]

use composelab_ui_layout::{LinearArrangement, VerticalAlignment};

use super::layout::Layout;
use crate::layout::policies::FlexMeasurePolicy;
use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSpec {
    pub horizontal_arrangement: LinearArrangement,
    pub vertical_alignment: VerticalAlignment,
}

impl RowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.horizontal_arrangement = arrangement;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub(crate) fn policy(&self) -> FlexMeasurePolicy {
        FlexMeasurePolicy::row(self.horizontal_arrangement, self.vertical_alignment)
    }
}

impl Default for RowSpec {
    fn default() -> Self {
        Self {
            horizontal_arrangement: LinearArrangement::Start,
            vertical_alignment: VerticalAlignment::Top,
        }
    }
}

pub fn Row<F>(ui: &mut UiTreeBuilder, modifier: Modifier, spec: RowSpec, content: F) -> UiNode
where
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    Layout(ui, modifier, NodeKind::Layout, spec.policy(), content)
}
