//! Light Material-style theme used by the built-in widgets.

use crate::modifier::Color;
use crate::text::TextStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub on_primary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub outline: Color,
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb_u8(0x67, 0x50, 0xA4),
            on_primary: Color::WHITE,
            surface: Color::from_rgb_u8(0xFF, 0xFB, 0xFE),
            on_surface: Color::from_rgb_u8(0x1C, 0x1B, 0x1F),
            surface_variant: Color::from_rgb_u8(0xE7, 0xE0, 0xEC),
            outline: Color::LIGHT_GRAY,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Font sizes for the text roles the widgets use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub title_large: f32,
    pub title_small: f32,
    pub body_medium: f32,
    pub label_large: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_large: 22.0,
            title_small: 14.0,
            body_medium: 14.0,
            label_large: 14.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub typography: Typography,
}

impl Theme {
    pub fn title_large(&self) -> TextStyle {
        TextStyle::new(self.typography.title_large, self.colors.on_surface)
    }

    pub fn title_small(&self) -> TextStyle {
        TextStyle::new(self.typography.title_small, self.colors.on_surface)
    }

    pub fn body_medium(&self) -> TextStyle {
        TextStyle::new(self.typography.body_medium, self.colors.on_surface)
    }

    pub fn label_large(&self) -> TextStyle {
        TextStyle::new(self.typography.label_large, self.colors.on_primary)
    }
}
