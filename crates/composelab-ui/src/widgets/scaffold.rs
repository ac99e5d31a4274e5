#![allow(non_snake_case)]

use super::{BoxLayout, BoxSpec, Column, ColumnSpec};
use crate::modifier::Modifier;
use crate::tree::{UiNode, UiTreeBuilder};

/// Screen frame: the top bar, then the body filling whatever height is left.
pub fn Scaffold<T, B>(ui: &mut UiTreeBuilder, modifier: Modifier, top_bar: T, body: B) -> UiNode
where
    T: FnOnce(&mut UiTreeBuilder) -> UiNode,
    B: FnOnce(&mut UiTreeBuilder) -> UiNode,
{
    let background = ui.theme().colors.surface;
    Column(
        ui,
        modifier.fill_max_size().background(background),
        ColumnSpec::new(),
        |ui| {
            let bar = top_bar(ui);
            let content = BoxLayout(
                ui,
                Modifier::empty().fill_max_width().weight(1.0),
                BoxSpec::new(),
                |ui| vec![body(ui)],
            );
            vec![bar, content]
        },
    )
}
