//! Recording draw commands and sounds

use glam::{Mat4, Quat, Vec2, Vec3};

use super::Ui;
use crate::backend::{DrawCommand, UiImage, UiSound, UiVisual};
use crate::spatial::Bounds;
use crate::theme::{Color, UiColor};

/// Brightness of elements inside a disabled scope
const DISABLED_BLEND: f32 = 0.5;

/// Gap between a face and the text drawn on it
pub(super) const TEXT_LIFT: f32 = 0.002;

impl Ui {
    /// Palette color scaled by `blend`, dimmed when disabled
    pub(super) fn element_color(&self, slot: UiColor, blend: f32) -> Color {
        let color = self.palette.color(slot).scaled(blend);
        if self.is_enabled() {
            color
        } else {
            color.scaled(DISABLED_BLEND)
        }
    }

    /// Queue an element whose top-left-back corner is `top_left` and which
    /// extends `size.z` toward the viewer
    pub(super) fn draw_element(&mut self, visual: UiVisual, top_left: Vec3, size: Vec3, color: Color) {
        let local = Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, top_left - size / 2.0);
        self.draws.push(DrawCommand::Element {
            visual,
            transform: self.hierarchy.to_world() * local,
            color,
        });
    }

    pub(super) fn draw_text(&mut self, text: &str, top_left: Vec3, bounds: Vec2) {
        if text.is_empty() {
            return;
        }
        let color = self.element_color(UiColor::Text, 1.0);
        self.draws.push(DrawCommand::Text {
            text: text.to_string(),
            transform: self.hierarchy.to_world() * Mat4::from_translation(top_left),
            bounds,
            color,
        });
    }

    /// Image of `height` centered on `center`, facing the viewer
    pub(super) fn draw_image(&mut self, image: UiImage, center: Vec3, height: f32) {
        let scale = Vec3::new(height * image.aspect, height, 1.0);
        let local = Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, center);
        let color = if self.is_enabled() {
            Color::WHITE
        } else {
            Color::WHITE.scaled(DISABLED_BLEND)
        };
        self.draws.push(DrawCommand::Image {
            image,
            transform: self.hierarchy.to_world() * local,
            color,
        });
    }

    /// Line between two world-space points
    pub(super) fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color, thickness: f32) {
        self.draws.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    pub(super) fn draw_panel(&mut self, bounds: &Bounds) {
        let depth = self.settings.depth * 0.1;
        let color = self.element_color(UiColor::Background, 1.0);
        self.draw_element(
            UiVisual::Panel,
            bounds.top_left(),
            Vec3::new(bounds.dimensions.x, bounds.dimensions.y, depth),
            color,
        );
    }

    /// Debug wireframe for a hit-test volume
    pub(super) fn debug_volume(&mut self, bounds: &Bounds) {
        if !self.show_volumes {
            return;
        }
        let local = Mat4::from_scale_rotation_translation(bounds.dimensions, Quat::IDENTITY, bounds.center);
        self.draws.push(DrawCommand::DebugBox {
            transform: self.hierarchy.to_world() * local,
        });
    }

    pub(super) fn play_sound(&mut self, sound: UiSound, at: Vec3) {
        self.sounds.push((sound, at));
    }
}
