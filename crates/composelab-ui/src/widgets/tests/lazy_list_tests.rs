use super::*;
use crate::layout::{measure_layout, LayoutBox};
use crate::widgets::{Column, ColumnSpec, ImageListItem};
use composelab_foundation::ScrollState;

fn image_list(ui: &mut UiTreeBuilder, state: &LazyListState) -> UiNode {
    LazyColumn(
        ui,
        state,
        Modifier::empty(),
        LazyListMeasureConfig::default(),
        100,
        ImageListItem,
    )
}

/// "Item #i" label somewhere below `layout_box`.
fn label_of(layout_box: &LayoutBox) -> Option<String> {
    if let NodeKind::Text { value } = &layout_box.kind {
        return Some(value.clone());
    }
    layout_box.children.iter().find_map(label_of)
}

#[test]
fn only_the_window_around_the_viewport_is_placed() {
    let mut ui = UiTreeBuilder::new();
    let state = LazyListState::new();
    let list = image_list(&mut ui, &state);

    let tree = measure_layout(&list, Size::new(400.0, 300.0)).unwrap();

    let root = tree.root();
    assert_eq!(root.rect.height, 300.0);
    assert_eq!(root.rect.width, 116.0);
    let labels: Vec<_> = root.children.iter().filter_map(label_of).collect();
    let expected: Vec<_> = (0..8).map(|i| format!("Item #{i}")).collect();
    assert_eq!(labels, expected);
    assert_eq!(root.children[5].rect.y, 250.0);
    assert_eq!(state.first_visible_item_index(), 0);
    assert!(state.can_scroll_forward());
}

#[test]
fn scrolling_shifts_the_window_on_the_next_layout() {
    let mut ui = UiTreeBuilder::new();
    let state = LazyListState::new();
    let list = image_list(&mut ui, &state);
    measure_layout(&list, Size::new(400.0, 300.0)).unwrap();

    assert_eq!(state.scroll_by(125.0), 125.0);
    let tree = measure_layout(&list, Size::new(400.0, 300.0)).unwrap();

    assert_eq!(state.first_visible_item_index(), 2);
    assert_eq!(state.first_visible_item_scroll_offset(), 25.0);
    let item_two = tree
        .root()
        .children
        .iter()
        .find(|child| label_of(child).as_deref() == Some("Item #2"))
        .map(|child| child.rect.y);
    assert_eq!(item_two, Some(-25.0));
}

#[test]
fn scroll_to_last_item_pins_it_to_the_bottom() {
    let mut ui = UiTreeBuilder::new();
    let state = LazyListState::new();
    let list = image_list(&mut ui, &state);

    state.scroll_to_item(99, 0.0);
    let tree = measure_layout(&list, Size::new(400.0, 300.0)).unwrap();

    let last = tree.root().children.last().map(|child| child.rect);
    assert_eq!(last.map(|rect| rect.bottom()), Some(300.0));
    assert_eq!(state.first_visible_item_index(), 94);
    assert!(!state.can_scroll_forward());
}

#[test]
fn unbounded_height_shows_nothing() {
    let mut ui = UiTreeBuilder::new();
    let state = LazyListState::new();
    let outer = Column(
        &mut ui,
        Modifier::empty().vertical_scroll(ScrollState::new(0.0)),
        ColumnSpec::new(),
        |ui| vec![image_list(ui, &state)],
    );

    let tree = measure_layout(&outer, Size::new(400.0, 300.0)).unwrap();

    let list = &tree.root().children[0];
    assert_eq!(list.kind, NodeKind::LazyList);
    assert_eq!(list.rect.height, 0.0);
    assert!(list.children.is_empty());
}
