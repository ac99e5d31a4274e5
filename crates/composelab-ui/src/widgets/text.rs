#![allow(non_snake_case)]

use crate::modifier::Modifier;
use crate::text::{TextMeasurePolicy, TextStyle};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

pub fn Text(
    ui: &mut UiTreeBuilder,
    value: impl Into<String>,
    modifier: Modifier,
    style: TextStyle,
) -> UiNode {
    let value = value.into();
    let policy = TextMeasurePolicy::new(value.clone(), style);
    ui.node(modifier, NodeKind::Text { value }, policy, vec![])
}
