use super::Modifier;

impl Modifier {
    pub fn fill_max_size(self) -> Self {
        self.fill_max_width().fill_max_height()
    }

    pub fn fill_max_width(self) -> Self {
        self.fill_max_width_fraction(1.0)
    }

    /// Takes `fraction` of the incoming max width; ignored when the width is unbounded.
    pub fn fill_max_width_fraction(mut self, fraction: f32) -> Self {
        self.fill_width = Some(fraction.clamp(0.0, 1.0));
        self
    }

    pub fn fill_max_height(self) -> Self {
        self.fill_max_height_fraction(1.0)
    }

    pub fn fill_max_height_fraction(mut self, fraction: f32) -> Self {
        self.fill_height = Some(fraction.clamp(0.0, 1.0));
        self
    }
}
