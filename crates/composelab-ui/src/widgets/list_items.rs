#![allow(non_snake_case)]

use composelab_foundation::ScrollState;
use composelab_ui_layout::VerticalAlignment;

use super::{Column, ColumnSpec, Image, Row, RowSpec, Spacer, Text};
use crate::modifier::{Modifier, Size};
use crate::tree::{UiNode, UiTreeBuilder};

pub const LIST_IMAGE_SIZE: f32 = 50.0;
pub const SIMPLE_LIST_SIZE: usize = 100;

pub fn item_label(index: usize) -> String {
    format!("Item #{index}")
}

/// Row of a 50x50 logo, a 10px gap and "Item #index".
pub fn ImageListItem(ui: &mut UiTreeBuilder, index: usize) -> UiNode {
    let style = ui.theme().title_small();
    Row(
        ui,
        Modifier::empty(),
        RowSpec::new().vertical_alignment(VerticalAlignment::CenterVertically),
        |ui| {
            vec![
                Image(
                    ui,
                    "Android Logo",
                    Size::new(LIST_IMAGE_SIZE, LIST_IMAGE_SIZE),
                    Modifier::empty(),
                ),
                Spacer(ui, Size::new(10.0, 0.0)),
                Text(ui, item_label(index), Modifier::empty(), style),
            ]
        },
    )
}

/// Eager column of plain "Item #i" texts inside a vertical scroll.
pub fn SimpleList(ui: &mut UiTreeBuilder, scroll_state: &ScrollState) -> UiNode {
    let style = ui.theme().body_medium();
    Column(
        ui,
        Modifier::empty().vertical_scroll(scroll_state.clone()),
        ColumnSpec::new(),
        |ui| {
            (0..SIMPLE_LIST_SIZE)
                .map(|index| Text(ui, item_label(index), Modifier::empty(), style))
                .collect()
        },
    )
}

#[cfg(test)]
#[path = "tests/list_items_tests.rs"]
mod tests;
