use composelab_ui::*;

fn find_kind<'a>(tree: &'a LayoutTree, kind: &NodeKind) -> &'a LayoutBox {
    tree.iter()
        .find(|layout_box| &layout_box.kind == kind)
        .unwrap_or_else(|| panic!("no {kind} in\n{}", tree.dump()))
}

#[test]
fn chip_is_swatch_gap_and_label_inside_padding() {
    let mut ui = UiTreeBuilder::new();
    let chip = Chip(&mut ui, "Arts & Crafts", Modifier::empty().padding(8.0));

    let tree = measure_layout(&chip, Size::new(1000.0, 1000.0)).unwrap();

    assert_eq!(tree.root().rect.size(), Size::new(156.0, 44.0));
    let outline = &tree.root().children[0];
    assert_eq!(outline.rect, Rect { x: 8.0, y: 8.0, width: 140.0, height: 28.0 });
    assert!(outline.modifier.border_stroke().is_some());
    let swatch = &outline.children[0];
    assert_eq!(swatch.rect, Rect { x: 16.0, y: 14.0, width: 16.0, height: 16.0 });
    let label = find_kind(&tree, &NodeKind::Text { value: "Arts & Crafts".into() });
    assert_eq!(label.rect.origin(), Point::new(36.0, 12.0));
}

#[test]
fn button_wraps_its_label() {
    let mut ui = UiTreeBuilder::new();
    let button = Button(&mut ui, "Scroll to top", Modifier::empty());

    let tree = measure_layout(&button, Size::new(1000.0, 1000.0)).unwrap();

    assert_eq!(tree.root().rect.size(), Size::new(152.0, 40.0));
    assert_eq!(tree.root().children[0].rect.origin(), Point::new(24.0, 10.0));
    assert_eq!(
        tree.root().modifier.background_color(),
        Some(Theme::default().colors.primary)
    );
}

#[test]
fn corner_radii_are_resolved_against_the_laid_out_size() {
    let mut ui = UiTreeBuilder::new();
    let button = Button(&mut ui, "Scroll to top", Modifier::empty());
    let tree = measure_layout(&button, Size::new(1000.0, 1000.0)).unwrap();
    assert_eq!(tree.root().corner_radii(), Some(CornerRadii::uniform(20.0)));
    assert_eq!(tree.root().children[0].corner_radii(), None);

    let mut ui = UiTreeBuilder::new();
    let squat = Button(&mut ui, "Scroll to top", Modifier::empty().height(30.0));
    let tree = measure_layout(&squat, Size::new(1000.0, 1000.0)).unwrap();
    assert_eq!(tree.root().corner_radii(), Some(CornerRadii::uniform(15.0)));
}

#[test]
fn top_app_bar_spans_the_width_with_actions_at_the_end() {
    let mut ui = UiTreeBuilder::new();
    let bar = TopAppBar(&mut ui, "Test", |ui| {
        vec![IconButton(ui, "favorite", Modifier::empty())]
    });

    let tree = measure_layout(&bar, Size::new(360.0, 640.0)).unwrap();

    assert_eq!(tree.root().kind, NodeKind::AppBar);
    assert_eq!(tree.root().rect.size(), Size::new(360.0, 64.0));
    let action = find_kind(&tree, &NodeKind::Button { label: "favorite".into() });
    assert_eq!(action.rect, Rect { x: 308.0, y: 8.0, width: 48.0, height: 48.0 });
    let icon = &action.children[0];
    assert_eq!(icon.rect.origin(), Point::new(320.0, 20.0));
}

#[test]
fn scaffold_gives_the_body_the_height_below_the_bar() {
    let mut ui = UiTreeBuilder::new();
    let screen = Scaffold(
        &mut ui,
        Modifier::empty(),
        |ui| TopAppBar(ui, "Test", |_| vec![]),
        |ui| BoxLayout(ui, Modifier::empty().fill_max_size(), BoxSpec::new(), |_| vec![]),
    );

    let tree = measure_layout(&screen, Size::new(360.0, 640.0)).unwrap();

    assert_eq!(tree.root().rect.size(), Size::new(360.0, 640.0));
    let body = &tree.root().children[1];
    assert_eq!(body.rect, Rect { x: 0.0, y: 64.0, width: 360.0, height: 576.0 });
    assert_eq!(body.children[0].rect.size(), Size::new(360.0, 576.0));
}

#[test]
fn staggered_grid_rejects_zero_rows_without_building_children() {
    let mut ui = UiTreeBuilder::new();
    let mut built = false;

    let grid = StaggeredGrid(&mut ui, 0, Modifier::empty(), |_| {
        built = true;
        vec![]
    });

    assert_eq!(grid.unwrap_err(), LayoutError::InvalidRowCount { rows: 0 });
    assert!(!built);
    assert_eq!(ui.nodes_built(), 0);
}

#[test]
fn topics_are_nineteen_labels() {
    assert_eq!(TOPICS.len(), 19);
    assert_eq!(TOPICS[0], "Arts & Crafts");
    assert_eq!(TOPICS[18], "Writing");
}
