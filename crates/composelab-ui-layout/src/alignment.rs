//! Where a smaller child sits inside a larger box.

/// Two-axis alignment for Box content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );

    pub const CENTER_START: Self =
        Self::new(HorizontalAlignment::Start, VerticalAlignment::CenterVertically);

    /// Offset of a `child_width` x `child_height` box inside the available area.
    pub fn align(
        &self,
        width: f32,
        height: f32,
        child_width: f32,
        child_height: f32,
    ) -> (f32, f32) {
        (
            self.horizontal.align(width, child_width),
            self.vertical.align(height, child_height),
        )
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        let bias = match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => 0.5,
            HorizontalAlignment::End => 1.0,
        };
        biased_offset(bias, available, child)
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        let bias = match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => 0.5,
            VerticalAlignment::Bottom => 1.0,
        };
        biased_offset(bias, available, child)
    }
}

/// Share `bias` of the free space; a child larger than the box sits at 0.
fn biased_offset(bias: f32, available: f32, child: f32) -> f32 {
    ((available - child) * bias).max(0.0)
}
