use composelab_ui_layout::Constraints;

use super::{Modifier, Size};

impl Modifier {
    /// Preferred outer width, coerced into the incoming constraints.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, size: Size) -> Self {
        self.width(size.width).height(size.height)
    }

    pub fn size_points(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn preferred_size(&self) -> (Option<f32>, Option<f32>) {
        (self.width, self.height)
    }

    /// Constraints for the node's outer box after size and fill requests.
    ///
    /// Fill wins over a preferred size on the same axis, but only when that
    /// axis is bounded.
    pub fn resolve_constraints(&self, incoming: Constraints) -> Constraints {
        let mut resolved = incoming;

        let fill_width = self
            .fill_width
            .filter(|_| incoming.has_bounded_width())
            .map(|fraction| incoming.max_width * fraction);
        if let Some(width) = fill_width.or(self.width) {
            let width = width.clamp(incoming.min_width, incoming.max_width);
            resolved = resolved.copy_with_width(width, width);
        }

        let fill_height = self
            .fill_height
            .filter(|_| incoming.has_bounded_height())
            .map(|fraction| incoming.max_height * fraction);
        if let Some(height) = fill_height.or(self.height) {
            let height = height.clamp(incoming.min_height, incoming.max_height);
            resolved = resolved.copy_with_height(height, height);
        }

        resolved
    }
}
