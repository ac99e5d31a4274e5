use super::{Color, Modifier, RoundedCornerShape};

/// Outline drawn around a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStroke {
    pub width: f32,
    pub color: Color,
}

impl Modifier {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(BorderStroke { width, color });
        self
    }

    /// Rounds the node's background and border.
    pub fn rounded_corners(mut self, radius: f32) -> Self {
        self.shape = Some(RoundedCornerShape::uniform(radius));
        self
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    pub fn border_stroke(&self) -> Option<BorderStroke> {
        self.border
    }

    pub fn corner_shape(&self) -> Option<RoundedCornerShape> {
        self.shape
    }
}
