use super::{EdgeInsets, Modifier};

impl Modifier {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(16.0)`
    pub fn padding(self, p: f32) -> Self {
        self.padding_each(EdgeInsets::uniform(p))
    }

    /// Add horizontal padding (left and right).
    pub fn padding_horizontal(self, horizontal: f32) -> Self {
        self.padding_each(EdgeInsets::symmetric(horizontal, 0.0))
    }

    /// Add vertical padding (top and bottom).
    pub fn padding_vertical(self, vertical: f32) -> Self {
        self.padding_each(EdgeInsets::symmetric(0.0, vertical))
    }

    /// Add symmetric padding (horizontal and vertical).
    ///
    /// Example: `Modifier::empty().padding_symmetric(16.0, 8.0)`
    pub fn padding_symmetric(self, horizontal: f32, vertical: f32) -> Self {
        self.padding_each(EdgeInsets::symmetric(horizontal, vertical))
    }

    /// Add padding with explicit values for each edge.
    pub fn padding_each(mut self, padding: EdgeInsets) -> Self {
        self.padding += padding;
        self
    }

    pub fn padding_values(&self) -> EdgeInsets {
        self.padding
    }
}
