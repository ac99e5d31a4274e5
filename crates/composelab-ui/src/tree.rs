//! The UI as data: an immutable tree of typed nodes.
//!
//! Screens are plain functions that build a fresh [`UiNode`] tree through a
//! [`UiTreeBuilder`]. Layout reads the tree and never mutates it; state that
//! survives between builds (scroll positions) lives in shared handles captured
//! by modifiers and policies.

use std::fmt;
use std::rc::Rc;

use composelab_ui_layout::{MeasurePolicy, NodeId};

use crate::modifier::Modifier;
use crate::theme::Theme;

/// What a node represents, independent of how it is measured.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Layout,
    Text { value: String },
    Spacer,
    Image { description: String },
    Button { label: String },
    Chip { label: String },
    AppBar,
    LazyList,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Layout => "Layout",
            NodeKind::Text { .. } => "Text",
            NodeKind::Spacer => "Spacer",
            NodeKind::Image { .. } => "Image",
            NodeKind::Button { .. } => "Button",
            NodeKind::Chip { .. } => "Chip",
            NodeKind::AppBar => "AppBar",
            NodeKind::LazyList => "LazyList",
        }
    }

    /// Label carried by text-bearing kinds.
    pub fn label(&self) -> Option<&str> {
        match self {
            NodeKind::Text { value } => Some(value),
            NodeKind::Image { description } => Some(description),
            NodeKind::Button { label } | NodeKind::Chip { label } => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}({label:?})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

pub struct UiNode {
    pub id: NodeId,
    pub modifier: Modifier,
    pub kind: NodeKind,
    pub policy: Rc<dyn MeasurePolicy>,
    pub children: Vec<Rc<UiNode>>,
}

impl UiNode {
    pub fn children(&self) -> impl Iterator<Item = &UiNode> {
        self.children.iter().map(|child| child.as_ref())
    }

    /// Depth-first search for `id`, this node included.
    pub fn find(&self, id: NodeId) -> Option<&UiNode> {
        if self.id == id {
            return Some(self);
        }
        self.children().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(UiNode::node_count).sum::<usize>()
    }
}

impl fmt::Debug for UiNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiNode")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("policy", &self.policy.debug_name())
            .field("modifier", &self.modifier)
            .field("children", &self.children)
            .finish()
    }
}

/// Hands out node ids in build order, starting at 1.
#[derive(Debug, Default)]
pub struct NodeIdAllocator {
    last: NodeId,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> NodeId {
        self.last += 1;
        self.last
    }

    pub fn allocated(&self) -> usize {
        self.last
    }
}

/// Context threaded through widget functions while a tree is built.
#[derive(Debug, Default)]
pub struct UiTreeBuilder {
    ids: NodeIdAllocator,
    theme: Theme,
}

impl UiTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            ids: NodeIdAllocator::new(),
            theme,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn nodes_built(&self) -> usize {
        self.ids.allocated()
    }

    /// Creates a node with a fresh id.
    pub fn node(
        &mut self,
        modifier: Modifier,
        kind: NodeKind,
        policy: impl MeasurePolicy + 'static,
        children: Vec<UiNode>,
    ) -> UiNode {
        UiNode {
            id: self.ids.allocate(),
            modifier,
            kind,
            policy: Rc::new(policy),
            children: children.into_iter().map(Rc::new).collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
