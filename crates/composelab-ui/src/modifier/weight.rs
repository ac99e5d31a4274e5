use composelab_ui_layout::FlexParentData;

use super::Modifier;

impl Modifier {
    pub fn weight(self, weight: f32) -> Self {
        self.weight_with_fill(weight, true)
    }

    pub fn weight_with_fill(mut self, weight: f32, fill: bool) -> Self {
        self.weight = Some(FlexParentData::new(weight, fill));
        self
    }

    pub fn flex_parent_data(&self) -> Option<FlexParentData> {
        self.weight
    }
}
