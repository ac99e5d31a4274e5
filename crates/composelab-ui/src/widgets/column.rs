//! Vertical stacking.

#![allow(non_snake_case)]

use composelab_ui_layout::{HorizontalAlignment, LinearArrangement};

use super::layout::Layout;
use crate::layout::policies::FlexMeasurePolicy;
use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Arrangement along and alignment across a Column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            vertical_arrangement: LinearArrangement::Start,
            horizontal_alignment: HorizontalAlignment::Start,
        }
    }
}

pub fn Column<F>(ui: &mut UiTreeBuilder, modifier: Modifier, spec: ColumnSpec, content: F) -> UiNode
where
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    let policy = FlexMeasurePolicy::column(spec.vertical_arrangement, spec.horizontal_alignment);
    Layout(ui, modifier, NodeKind::Layout, policy, content)
}
