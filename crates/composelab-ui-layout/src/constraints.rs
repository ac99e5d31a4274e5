//! Size bounds passed from parent to child during measurement.

use crate::error::LayoutError;

/// Min/max bounds a node must respect when it reports its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Exactly `width` x `height`.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to the given maxima.
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// No lower bound and no upper bound on either axis.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Checks that both axes describe a non-empty range.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_axis("width", self.min_width, self.max_width)?;
        check_axis("height", self.min_height, self.max_height)
    }

    /// Clamps a desired size into range, axis by axis.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// Both maxima are finite.
    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    /// Both axes collapse to a single size.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn copy_with_width(self, min_width: f32, max_width: f32) -> Self {
        Self {
            min_width,
            max_width,
            ..self
        }
    }

    pub fn copy_with_height(self, min_height: f32, max_height: f32) -> Self {
        Self {
            min_height,
            max_height,
            ..self
        }
    }

    /// Shrinks every bound by the given padding, never below zero.
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Drops both minima to zero.
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }
}

fn check_axis(axis: &'static str, min: f32, max: f32) -> Result<(), LayoutError> {
    // `!(min <= max)` also rejects NaN on either side.
    if !(min <= max) || min < 0.0 {
        return Err(LayoutError::InvalidConstraints { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
