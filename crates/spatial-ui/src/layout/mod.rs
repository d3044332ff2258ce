//! Layout cursor
//!
//! A stack of rectangular placement regions. Each region has a cursor that
//! starts at its top-left corner and advances right (toward -X) as space is
//! reserved, wrapping down (toward -Y) when a fixed-width region runs out
//! of room. An axis with size 0 grows with its content.

mod cursor;
mod panel;

pub use cursor::{Cut, FrameMeasure, LayoutStack, WindowMeasure};
pub use panel::{PanelPadding, PendingPanel};

use crate::settings::UiSettings;

/// The spacing values layout needs, captured from [`UiSettings`] at the
/// start of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub margin: f32,
    pub padding: f32,
    pub gutter: f32,
    pub depth: f32,
    pub line_height: f32,
}

impl LayoutMetrics {
    pub fn from_settings(settings: &UiSettings, char_height: f32) -> Self {
        Self {
            margin: settings.margin,
            padding: settings.padding,
            gutter: settings.gutter,
            depth: settings.depth,
            line_height: settings.padding * 2.0 + char_height,
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        let settings = UiSettings::default();
        Self::from_settings(&settings, settings.text_height)
    }
}
