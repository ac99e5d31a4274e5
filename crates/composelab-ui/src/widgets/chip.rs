#![allow(non_snake_case)]

use composelab_ui_layout::VerticalAlignment;

use super::{BoxLayout, BoxSpec, Layout, Row, RowSpec, Spacer, Text};
use crate::layout::policies::BoxMeasurePolicy;
use crate::modifier::{EdgeInsets, Modifier, Size};
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

const CHIP_CORNER_RADIUS: f32 = 8.0;
const SWATCH_SIZE: f32 = 16.0;
const SWATCH_GAP: f32 = 4.0;

/// Bordered topic chip: a colored swatch, a gap and the label.
///
/// `modifier` applies outside the border, so padding passed here spaces chips
/// apart.
pub fn Chip(ui: &mut UiTreeBuilder, label: impl Into<String>, modifier: Modifier) -> UiNode {
    let label = label.into();
    let colors = ui.theme().colors;
    let style = ui.theme().body_medium();
    let text = label.clone();
    let outlined = Modifier::empty()
        .border(1.0, colors.outline)
        .rounded_corners(CHIP_CORNER_RADIUS);
    Layout(
        ui,
        modifier,
        NodeKind::Chip { label },
        BoxMeasurePolicy::default(),
        move |ui| {
            let row = Row(
                ui,
                outlined.padding_each(EdgeInsets::from_components(8.0, 4.0, 8.0, 4.0)),
                RowSpec::new().vertical_alignment(VerticalAlignment::CenterVertically),
                |ui| {
                    vec![
                        BoxLayout(
                            ui,
                            Modifier::empty()
                                .size_points(SWATCH_SIZE, SWATCH_SIZE)
                                .background(colors.primary),
                            BoxSpec::new(),
                            |_| vec![],
                        ),
                        Spacer(ui, Size::new(SWATCH_GAP, 0.0)),
                        Text(ui, text, Modifier::empty(), style),
                    ]
                },
            );
            vec![row]
        },
    )
}
