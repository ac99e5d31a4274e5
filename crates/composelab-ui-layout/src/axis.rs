/// Main axis of a linear layout (Row or Column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children laid out left to right; cross axis is vertical.
    Horizontal,
    /// Children laid out top to bottom; cross axis is horizontal.
    Vertical,
}

impl Axis {
    /// Picks the component of `(width, height)` that runs along this axis.
    #[inline]
    pub fn main(self, width: f32, height: f32) -> f32 {
        match self {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }

    /// Picks the component of `(width, height)` that runs across this axis.
    #[inline]
    pub fn cross(self, width: f32, height: f32) -> f32 {
        match self {
            Axis::Horizontal => height,
            Axis::Vertical => width,
        }
    }

    /// Turns a `(main, cross)` pair back into `(x/width, y/height)`.
    #[inline]
    pub fn to_xy(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }
}
