//! Measure policies behind the basic containers and leaves.

use composelab_ui_layout::{
    Alignment, Arrangement, Axis, Constraints, FlexParentData, HorizontalAlignment,
    LinearArrangement, Measurable, MeasurePolicy, MeasureResult, Placeable, Placement,
    VerticalAlignment,
};
use smallvec::SmallVec;

use crate::modifier::Size;

/// Stacks children on top of each other, positioned by `content_alignment`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxMeasurePolicy {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl BoxMeasurePolicy {
    pub fn new(content_alignment: Alignment, propagate_min_constraints: bool) -> Self {
        Self {
            content_alignment,
            propagate_min_constraints,
        }
    }
}

impl Default for BoxMeasurePolicy {
    fn default() -> Self {
        Self::new(Alignment::TOP_START, false)
    }
}

impl MeasurePolicy for BoxMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let child_constraints = if self.propagate_min_constraints {
            constraints
        } else {
            constraints.loosen()
        };

        let placeables: SmallVec<[Box<dyn Placeable>; 4]> = measurables
            .iter()
            .map(|measurable| measurable.measure(child_constraints))
            .collect();
        let content_width = placeables.iter().map(|p| p.width()).fold(0.0, f32::max);
        let content_height = placeables.iter().map(|p| p.height()).fold(0.0, f32::max);
        let (width, height) = constraints.constrain(content_width, content_height);

        let placements = placeables
            .iter()
            .map(|placeable| {
                let (x, y) =
                    self.content_alignment
                        .align(width, height, placeable.width(), placeable.height());
                placeable.place(x, y);
                Placement::new(placeable.node_id(), x, y, 0)
            })
            .collect();

        MeasureResult::new(Size::new(width, height), placements)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.min_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.min_intrinsic_height(width))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_height(width))
            .fold(0.0, f32::max)
    }

    fn debug_name(&self) -> &str {
        "BoxMeasurePolicy"
    }
}

/// Cross-axis alignment for flex layouts, interpreted relative to the flex axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrossAxisAlignment {
    Start,
    Center,
    End,
}

impl CrossAxisAlignment {
    fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            CrossAxisAlignment::Start => 0.0,
            CrossAxisAlignment::Center => ((available - child) / 2.0).max(0.0),
            CrossAxisAlignment::End => (available - child).max(0.0),
        }
    }
}

impl From<HorizontalAlignment> for CrossAxisAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Start => CrossAxisAlignment::Start,
            HorizontalAlignment::CenterHorizontally => CrossAxisAlignment::Center,
            HorizontalAlignment::End => CrossAxisAlignment::End,
        }
    }
}

impl From<VerticalAlignment> for CrossAxisAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => CrossAxisAlignment::Start,
            VerticalAlignment::CenterVertically => CrossAxisAlignment::Center,
            VerticalAlignment::Bottom => CrossAxisAlignment::End,
        }
    }
}

/// Linear layout shared by Row and Column.
///
/// Children without weight are measured first with loose constraints. When the
/// main axis is bounded, weighted children then split what is left in
/// proportion to their weights; on an unbounded axis weights are ignored.
/// Content that does not fit overflows the container and is packed from the
/// start regardless of the arrangement.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexMeasurePolicy {
    pub axis: Axis,
    pub main_axis_arrangement: LinearArrangement,
    pub cross_axis_alignment: CrossAxisAlignment,
}

impl FlexMeasurePolicy {
    pub fn new(
        axis: Axis,
        main_axis_arrangement: LinearArrangement,
        cross_axis_alignment: CrossAxisAlignment,
    ) -> Self {
        Self {
            axis,
            main_axis_arrangement,
            cross_axis_alignment,
        }
    }

    pub fn row(
        horizontal_arrangement: LinearArrangement,
        vertical_alignment: VerticalAlignment,
    ) -> Self {
        Self::new(
            Axis::Horizontal,
            horizontal_arrangement,
            vertical_alignment.into(),
        )
    }

    pub fn column(
        vertical_arrangement: LinearArrangement,
        horizontal_alignment: HorizontalAlignment,
    ) -> Self {
        Self::new(
            Axis::Vertical,
            vertical_arrangement,
            horizontal_alignment.into(),
        )
    }

    fn constraints(&self, min_main: f32, max_main: f32, max_cross: f32) -> Constraints {
        match self.axis {
            Axis::Horizontal => Constraints {
                min_width: min_main,
                max_width: max_main,
                min_height: 0.0,
                max_height: max_cross,
            },
            Axis::Vertical => Constraints {
                min_width: 0.0,
                max_width: max_cross,
                min_height: min_main,
                max_height: max_main,
            },
        }
    }

    fn total_spacing(&self, count: usize) -> f32 {
        self.main_axis_arrangement.spacing() * count.saturating_sub(1) as f32
    }

    /// Intrinsic along the main axis: children summed plus spacing.
    fn main_intrinsic(
        &self,
        measurables: &[Box<dyn Measurable>],
        child: impl Fn(&dyn Measurable) -> f32,
    ) -> f32 {
        measurables.iter().map(|m| child(m.as_ref())).sum::<f32>()
            + self.total_spacing(measurables.len())
    }

    /// Intrinsic across the main axis: the largest child.
    fn cross_intrinsic(
        measurables: &[Box<dyn Measurable>],
        child: impl Fn(&dyn Measurable) -> f32,
    ) -> f32 {
        measurables.iter().map(|m| child(m.as_ref())).fold(0.0, f32::max)
    }
}

impl MeasurePolicy for FlexMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let axis = self.axis;
        let min_main = axis.main(constraints.min_width, constraints.min_height);
        let max_main = axis.main(constraints.max_width, constraints.max_height);
        let min_cross = axis.cross(constraints.min_width, constraints.min_height);
        let max_cross = axis.cross(constraints.max_width, constraints.max_height);

        let weights: SmallVec<[Option<FlexParentData>; 8]> = measurables
            .iter()
            .map(|m| m.flex_parent_data().filter(FlexParentData::has_weight))
            .collect();
        let distribute = max_main.is_finite() && weights.iter().any(Option::is_some);

        let mut placeables: SmallVec<[Option<Box<dyn Placeable>>; 8]> =
            measurables.iter().map(|_| None).collect();
        let loose = self.constraints(0.0, max_main, max_cross);
        let mut fixed_main = 0.0_f32;
        for (index, measurable) in measurables.iter().enumerate() {
            if distribute && weights[index].is_some() {
                continue;
            }
            let placeable = measurable.measure(loose);
            fixed_main += axis.main(placeable.width(), placeable.height());
            placeables[index] = Some(placeable);
        }

        if distribute {
            let remaining =
                (max_main - fixed_main - self.total_spacing(measurables.len())).max(0.0);
            let total_weight: f32 = weights.iter().flatten().map(|data| data.weight).sum();
            for (index, data) in weights.iter().enumerate() {
                let Some(data) = data else { continue };
                let allocated = remaining * data.weight / total_weight;
                let min = if data.fill { allocated } else { 0.0 };
                let constraints = self.constraints(min, allocated, max_cross);
                placeables[index] = Some(measurables[index].measure(constraints));
            }
        }

        let placeables: SmallVec<[Box<dyn Placeable>; 8]> =
            placeables.into_iter().flatten().collect();
        let main_sizes: SmallVec<[f32; 8]> = placeables
            .iter()
            .map(|p| axis.main(p.width(), p.height()))
            .collect();
        let content_main = main_sizes.iter().sum::<f32>() + self.total_spacing(placeables.len());
        let content_cross = placeables
            .iter()
            .map(|p| axis.cross(p.width(), p.height()))
            .fold(0.0, f32::max);
        let container_main = content_main.clamp(min_main, max_main);
        let container_cross = content_cross.clamp(min_cross, max_cross);

        let arrangement = match self.main_axis_arrangement {
            LinearArrangement::SpacedBy(_) => self.main_axis_arrangement,
            _ if content_main > container_main => LinearArrangement::Start,
            other => other,
        };
        let mut main_positions: SmallVec<[f32; 8]> =
            SmallVec::from_elem(0.0, main_sizes.len());
        arrangement.arrange(container_main, &main_sizes, &mut main_positions);

        let placements = placeables
            .iter()
            .zip(main_positions)
            .map(|(placeable, main)| {
                let cross = self.cross_axis_alignment.align(
                    container_cross,
                    axis.cross(placeable.width(), placeable.height()),
                );
                let (x, y) = axis.to_xy(main, cross);
                placeable.place(x, y);
                Placement::new(placeable.node_id(), x, y, 0)
            })
            .collect();

        let (width, height) = axis.to_xy(container_main, container_cross);
        MeasureResult::new(Size::new(width, height), placements)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        match self.axis {
            Axis::Horizontal => {
                self.main_intrinsic(measurables, |m| m.min_intrinsic_width(height))
            }
            Axis::Vertical => {
                Self::cross_intrinsic(measurables, |m| m.min_intrinsic_width(height))
            }
        }
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        match self.axis {
            Axis::Horizontal => {
                self.main_intrinsic(measurables, |m| m.max_intrinsic_width(height))
            }
            Axis::Vertical => {
                Self::cross_intrinsic(measurables, |m| m.max_intrinsic_width(height))
            }
        }
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        match self.axis {
            Axis::Horizontal => {
                Self::cross_intrinsic(measurables, |m| m.min_intrinsic_height(width))
            }
            Axis::Vertical => {
                self.main_intrinsic(measurables, |m| m.min_intrinsic_height(width))
            }
        }
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        match self.axis {
            Axis::Horizontal => {
                Self::cross_intrinsic(measurables, |m| m.max_intrinsic_height(width))
            }
            Axis::Vertical => {
                self.main_intrinsic(measurables, |m| m.max_intrinsic_height(width))
            }
        }
    }

    fn debug_name(&self) -> &str {
        match self.axis {
            Axis::Horizontal => "Row (Flex)",
            Axis::Vertical => "Column (Flex)",
        }
    }
}

/// Childless node with a preferred size (Spacer, Image placeholder).
#[derive(Clone, Debug, PartialEq)]
pub struct LeafMeasurePolicy {
    pub intrinsic_size: Size,
}

impl LeafMeasurePolicy {
    pub fn new(intrinsic_size: Size) -> Self {
        Self { intrinsic_size }
    }
}

impl MeasurePolicy for LeafMeasurePolicy {
    fn measure(
        &self,
        _measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let (width, height) =
            constraints.constrain(self.intrinsic_size.width, self.intrinsic_size.height);
        MeasureResult::new(Size::new(width, height), vec![])
    }

    fn min_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        self.intrinsic_size.width
    }

    fn max_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        self.intrinsic_size.width
    }

    fn min_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        self.intrinsic_size.height
    }

    fn max_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        self.intrinsic_size.height
    }

    fn debug_name(&self) -> &str {
        "LeafMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
