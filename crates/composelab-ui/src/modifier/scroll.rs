use composelab_foundation::ScrollState;

use super::Modifier;

impl Modifier {
    /// Lets content grow past the node's width; `state` tracks the offset.
    ///
    /// Children are measured with an unbounded max width while the node itself
    /// keeps the incoming width constraints.
    pub fn horizontal_scroll(mut self, state: ScrollState) -> Self {
        self.horizontal_scroll = Some(state);
        self
    }

    /// Vertical counterpart of [`Modifier::horizontal_scroll`].
    pub fn vertical_scroll(mut self, state: ScrollState) -> Self {
        self.vertical_scroll = Some(state);
        self
    }

    pub fn horizontal_scroll_state(&self) -> Option<&ScrollState> {
        self.horizontal_scroll.as_ref()
    }

    pub fn vertical_scroll_state(&self) -> Option<&ScrollState> {
        self.vertical_scroll.as_ref()
    }
}
