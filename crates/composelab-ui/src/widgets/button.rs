//! Buttons. Layout only; clicks are dispatched by the host.

#![allow(non_snake_case)]

use composelab_ui_layout::{Alignment, LinearArrangement, VerticalAlignment};

use super::{Image, Layout, Text};
use crate::layout::policies::BoxMeasurePolicy;
use crate::modifier::{Modifier, Size};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};
use crate::widgets::RowSpec;

const BUTTON_CORNER_RADIUS: f32 = 20.0;
const ICON_BUTTON_SIZE: f32 = 48.0;
const ICON_SIZE: f32 = 24.0;

/// Filled button with a text label.
pub fn Button(ui: &mut UiTreeBuilder, label: impl Into<String>, modifier: Modifier) -> UiNode {
    let label = label.into();
    let colors = ui.theme().colors;
    let style = ui.theme().label_large();
    let modifier = modifier
        .background(colors.primary)
        .rounded_corners(BUTTON_CORNER_RADIUS)
        .padding_symmetric(24.0, 10.0);
    let spec = RowSpec::new()
        .horizontal_arrangement(LinearArrangement::Center)
        .vertical_alignment(VerticalAlignment::CenterVertically);
    let text = label.clone();
    Layout(ui, modifier, NodeKind::Button { label }, spec.policy(), move |ui| {
        vec![Text(ui, text, Modifier::empty(), style)]
    })
}

/// 48x48 touch target around a 24x24 icon.
pub fn IconButton(
    ui: &mut UiTreeBuilder,
    description: impl Into<String>,
    modifier: Modifier,
) -> UiNode {
    let description = description.into();
    let icon = description.clone();
    Layout(
        ui,
        modifier.size_points(ICON_BUTTON_SIZE, ICON_BUTTON_SIZE),
        NodeKind::Button { label: description },
        BoxMeasurePolicy::new(Alignment::CENTER, false),
        move |ui| vec![Image(ui, icon, Size::new(ICON_SIZE, ICON_SIZE), Modifier::empty())],
    )
}
