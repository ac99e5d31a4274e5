//! The staggered grid tutorial screen.

use std::ops::RangeInclusive;

use composelab_animation::{AnimationHandle, AnimationScheduler, AnimationSpec};
use composelab_foundation::animate_scroll_to_item;
use composelab_ui::{
    Button, Chip, Column, ColumnSpec, IconButton, ImageListItem, LayoutError, LazyColumn,
    LazyListMeasureConfig, LazyListState, LinearArrangement, Modifier, Row, RowSpec, Scaffold,
    ScrollState, StaggeredGrid, TopAppBar, UiNode, UiTreeBuilder, SIMPLE_LIST_SIZE, TOPICS,
};
use log::info;

pub const SCREEN_TITLE: &str = "Test";
pub const SCROLL_TO_TOP_LABEL: &str = "Scroll to top";
pub const SCROLL_TO_BOTTOM_LABEL: &str = "Scroll to bottom";
pub const LIST_ITEM_COUNT: usize = SIMPLE_LIST_SIZE;

/// What the two buttons above the list do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    ToTop,
    ToBottom,
}

impl ScrollAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::ToTop => SCROLL_TO_TOP_LABEL,
            Self::ToBottom => SCROLL_TO_BOTTOM_LABEL,
        }
    }

    fn target_index(self) -> usize {
        match self {
            Self::ToTop => 0,
            Self::ToBottom => LIST_ITEM_COUNT - 1,
        }
    }
}

/// State that outlives a single build of the screen.
#[derive(Clone, Default)]
pub struct TutorialState {
    pub list: LazyListState,
    pub grid_scroll: ScrollState,
}

impl TutorialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a button's click action: an animated scroll of the image list.
    ///
    /// Starting one while another is running supersedes it.
    pub fn perform(
        &self,
        scheduler: &AnimationScheduler,
        action: ScrollAction,
        spec: AnimationSpec,
    ) -> AnimationHandle {
        info!("{} clicked", action.label());
        animate_scroll_to_item(scheduler, &self.list, action.target_index(), spec)
    }

    /// Indices of the list items the last layout pass left on screen.
    pub fn visible_window(&self) -> Option<RangeInclusive<usize>> {
        let info = self.list.layout_info();
        let first = info.visible_items_info.first()?.index;
        let last = info.visible_items_info.last()?.index;
        Some(first..=last)
    }
}

/// Scaffold with a "Test" app bar over the chip grid, the scroll buttons and
/// the image list.
pub fn TutorialScreen(
    ui: &mut UiTreeBuilder,
    state: &TutorialState,
    rows: usize,
) -> Result<UiNode, LayoutError> {
    let grid = TopicGrid(ui, &state.grid_scroll, rows)?;
    let list = state.list.clone();
    Ok(Scaffold(
        ui,
        Modifier::empty(),
        |ui| {
            TopAppBar(ui, SCREEN_TITLE, |ui| {
                vec![IconButton(ui, "favorite", Modifier::empty())]
            })
        },
        move |ui| BodyContent(ui, grid, &list),
    ))
}

/// The topic chips dealt into `rows` rows, scrolling horizontally.
pub fn TopicGrid(
    ui: &mut UiTreeBuilder,
    scroll: &ScrollState,
    rows: usize,
) -> Result<UiNode, LayoutError> {
    let grid = StaggeredGrid(ui, rows, Modifier::empty(), |ui| {
        TOPICS
            .iter()
            .map(|topic| Chip(ui, *topic, Modifier::empty().padding(8.0)))
            .collect()
    })?;
    Ok(Row(
        ui,
        Modifier::empty().horizontal_scroll(scroll.clone()),
        RowSpec::new(),
        move |_| vec![grid],
    ))
}

fn BodyContent(ui: &mut UiTreeBuilder, grid: UiNode, list: &LazyListState) -> UiNode {
    Column(
        ui,
        Modifier::empty().fill_max_size().padding(8.0),
        ColumnSpec::new(),
        |ui| {
            vec![
                grid,
                Row(
                    ui,
                    Modifier::empty(),
                    RowSpec::new().horizontal_arrangement(LinearArrangement::SpacedBy(8.0)),
                    |ui| {
                        vec![
                            Button(ui, ScrollAction::ToTop.label(), Modifier::empty()),
                            Button(ui, ScrollAction::ToBottom.label(), Modifier::empty()),
                        ]
                    },
                ),
                LazyColumn(
                    ui,
                    list,
                    Modifier::empty().fill_max_width().weight(1.0),
                    LazyListMeasureConfig::default(),
                    LIST_ITEM_COUNT,
                    ImageListItem,
                ),
            ]
        },
    )
}
