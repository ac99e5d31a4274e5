//! Easing curves and animation specs.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions matching the Material motion curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearInEasing,
}

impl Easing {
    /// Maps a linear progress fraction in [0, 1] onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearInEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Unit cubic bezier through (0,0) and (1,1) with two control points.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    // Polynomial coefficients: value(t) = ((a*t + b)*t + c)*t
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Finds the curve parameter for `x` and returns the eased value.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        const EPSILON: f32 = 1e-6;

        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < EPSILON {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Newton stalled; bisect instead.
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..24 {
            let error = self.x_at(t) - x;
            if error.abs() < EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        self.y_at(t)
    }
}

/// Duration, delay and curve of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased progress in [0, 1] after `elapsed_nanos` since the tween started.
    pub fn progress(&self, elapsed_nanos: u64) -> f32 {
        let elapsed_millis = elapsed_nanos as f64 / crate::NANOS_PER_MILLI as f64;
        let active = elapsed_millis - self.delay_millis as f64;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_millis == 0 {
            return 1.0;
        }
        let fraction = (active / self.duration_millis as f64).min(1.0) as f32;
        self.easing.transform(fraction)
    }

    /// True once `elapsed_nanos` covers the delay plus the full duration.
    pub fn is_finished_at(&self, elapsed_nanos: u64) -> bool {
        let total = self
            .delay_millis
            .saturating_add(self.duration_millis)
            .saturating_mul(crate::NANOS_PER_MILLI);
        elapsed_nanos >= total
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
