//! Color palette definitions

use super::Color;

/// Which palette slot an element is tinted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiColor {
    /// Window headers and highlights
    Primary,
    /// Window bodies and panels
    Background,
    /// Buttons, inputs, sliders
    Common,
    /// Selection bars and the slider thumb
    Complement,
    /// Text and the text caret
    Text,
}

/// A color palette for theming
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub common: Color,
    pub complement: Color,
    pub text: Color,
    /// Backplate border tint
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::slate()
    }
}

impl Palette {
    /// Cool grey-blue theme
    pub fn slate() -> Self {
        Self {
            primary: Color::from_rgb8(68, 104, 158),
            background: Color::from_rgb8(31, 35, 43),
            common: Color::from_rgb8(54, 61, 74),
            complement: Color::from_rgb8(158, 122, 68),
            text: Color::from_rgb8(235, 235, 240),
            border: Color::from_rgb8(90, 98, 112),
        }
    }

    /// High-contrast theme (amber on black)
    pub fn amber() -> Self {
        Self {
            primary: Color::from_rgb8(218, 165, 32),
            background: Color::from_rgb8(5, 7, 12),
            common: Color::from_rgb8(40, 34, 20),
            complement: Color::from_rgb8(0, 200, 220),
            text: Color::from_rgb8(255, 236, 200),
            border: Color::from_rgb8(120, 96, 40),
        }
    }

    pub fn color(&self, slot: UiColor) -> Color {
        match slot {
            UiColor::Primary => self.primary,
            UiColor::Background => self.background,
            UiColor::Common => self.common,
            UiColor::Complement => self.complement,
            UiColor::Text => self.text,
        }
    }
}
