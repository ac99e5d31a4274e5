//! Text metrics.
//!
//! Measurement is monospaced: a fixed advance per character and a fixed line
//! height, both scaled by font size. Good enough for headless layout and
//! deterministic tests.

use composelab_ui_layout::{Constraints, Measurable, MeasurePolicy, MeasureResult};

use crate::modifier::{Color, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    pub line_count: usize,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const CHAR_WIDTH: f32 = 8.0;
    const LINE_HEIGHT: f32 = 20.0;
    /// Font size at which the base metrics apply.
    const BASE_FONT_SIZE: f32 = 14.0;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let scale = style.font_size / Self::BASE_FONT_SIZE;
        let line_count = text.split('\n').count().max(1);
        let width = text
            .split('\n')
            .map(|line| line.chars().count() as f32 * Self::CHAR_WIDTH * scale)
            .fold(0.0_f32, f32::max);
        let line_height = Self::LINE_HEIGHT * scale;

        TextMetrics {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}

pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    MonospacedTextMeasurer.measure(text, style)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color) -> Self {
        Self { font_size, color }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0, Color::BLACK)
    }
}

/// Leaf policy sizing a node to its text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMeasurePolicy {
    text: String,
    style: TextStyle,
}

impl TextMeasurePolicy {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn metrics(&self) -> TextMetrics {
        measure_text(&self.text, &self.style)
    }
}

impl MeasurePolicy for TextMeasurePolicy {
    fn measure(
        &self,
        _measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let metrics = self.metrics();
        let (width, height) = constraints.constrain(metrics.width, metrics.height);
        MeasureResult::new(Size::new(width, height), vec![])
    }

    fn min_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        self.metrics().width
    }

    fn max_intrinsic_width(&self, _measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        self.metrics().width
    }

    fn min_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        self.metrics().height
    }

    fn max_intrinsic_height(&self, _measurables: &[Box<dyn Measurable>], _width: f32) -> f32 {
        self.metrics().height
    }

    fn debug_name(&self) -> &str {
        "TextMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
