#![allow(non_snake_case)]

use composelab_ui_layout::LayoutError;

use super::Layout;
use crate::layout::staggered_grid::StaggeredGridMeasurePolicy;
use crate::modifier::Modifier;
use crate::tree::{NodeKind, UiNode, UiTreeBuilder};

/// Deals the children round-robin into `rows` rows.
///
/// Fails with [`LayoutError::InvalidRowCount`] when `rows` is zero; `content`
/// is not run in that case.
pub fn StaggeredGrid<F>(
    ui: &mut UiTreeBuilder,
    rows: usize,
    modifier: Modifier,
    content: F,
) -> Result<UiNode, LayoutError>
where
    F: FnOnce(&mut UiTreeBuilder) -> Vec<UiNode>,
{
    let policy = StaggeredGridMeasurePolicy::new(rows)?;
    Ok(Layout(ui, modifier, NodeKind::Layout, policy, content))
}
