#![allow(non_snake_case)]

use composelab_ui_layout::VerticalAlignment;

use super::{Layout, RowSpec, Text};
use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

pub const TOP_APP_BAR_HEIGHT: f32 = 64.0;

/// Full-width bar with a title and trailing actions.
pub fn TopAppBar<F>(ui: &mut UiTreeBuilder, title: impl Into<String>, actions: F) -> UiNode
where
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    let title = title.into();
    let colors = ui.theme().colors;
    let style = ui.theme().title_large();
    let modifier = Modifier::empty()
        .fill_max_width()
        .height(TOP_APP_BAR_HEIGHT)
        .background(colors.surface)
        .padding_horizontal(4.0);
    let spec = RowSpec::new().vertical_alignment(VerticalAlignment::CenterVertically);
    Layout(ui, modifier, NodeKind::AppBar, spec.policy(), move |ui| {
        let mut children = vec![Text(
            ui,
            title,
            Modifier::empty().padding_horizontal(12.0).weight(1.0),
            style,
        )];
        children.extend(actions(ui));
        children
    })
}
