//! Horizontal sliders

use glam::{Vec2, Vec3};

use super::volume::Confirm;
use super::Ui;
use crate::backend::{UiSound, UiVisual};
use crate::theme::UiColor;

/// When a slider reports a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderNotify {
    /// Every frame the value moves
    #[default]
    Change,
    /// Once, when the hand lets go
    Finalize,
}

impl Ui {
    /// A slider across `width` (0 fills the line) that drags `value`
    /// between `min` and `max`, snapping to `step` when it's non-zero
    #[allow(clippy::too_many_arguments)]
    pub fn hslider(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        step: f32,
        width: f32,
        confirm: Confirm,
        notify: SliderNotify,
    ) -> bool {
        let id = self.ids.stack_hash(label);
        let depth = self.settings.depth;
        let bounds = self.layout.reserve_bounds(Vec2::new(width, 0.0), false, depth);
        let top_left = bounds.top_left();
        let size = Vec2::new(bounds.dimensions.x, bounds.dimensions.y);
        let knob = Vec2::new(size.y / 2.0, size.y);
        let travel = (size.x - knob.x).max(f32::EPSILON);

        let outcome = self.volume_behavior(id, bounds, confirm);
        let old_value = *value;
        if outcome.active.is_active() {
            if let Some(i) = outcome.interactor {
                let actor = self.interactors.get(i);
                let at = match confirm {
                    Confirm::Push => actor.finger,
                    Confirm::Pinch => actor.pinch_pt,
                };
                let percent = (((top_left.x - knob.x / 2.0) - at.x) / travel).clamp(0.0, 1.0);
                let mut new_value = min + percent * (max - min);
                if step != 0.0 {
                    new_value = min + ((new_value - min) / step).round() * step;
                }
                *value = new_value;
            }
        }

        if let Some(i) = outcome.interactor {
            let at = self.interactors.get(i).finger_world;
            if outcome.active.is_just_active() {
                self.play_sound(UiSound::Interact, at);
            } else if outcome.active.is_just_inactive() {
                self.play_sound(UiSound::Uninteract, at);
            }
        }

        let percent = if max != min {
            ((*value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let rule_height = (size.y * 0.2).max(self.settings.rounding);
        let rule = self.element_color(UiColor::Common, 1.0);
        self.draw_element(
            UiVisual::SliderLine,
            top_left - Vec3::new(0.0, (size.y - rule_height) / 2.0, 0.0),
            Vec3::new(size.x, rule_height, depth * 0.1),
            rule,
        );

        let blend = if outcome.focus.is_active() || outcome.active.is_active() { 2.0 } else { 1.0 };
        let knob_depth = if outcome.active.is_active() { depth * 0.5 } else { depth };
        let visual = match confirm {
            Confirm::Push => UiVisual::SliderPush,
            Confirm::Pinch => UiVisual::SliderPinch,
        };
        let color = self.element_color(UiColor::Primary, blend);
        self.draw_element(
            visual,
            top_left - Vec3::new(percent * travel, 0.0, 0.0),
            Vec3::new(knob.x, knob.y, knob_depth),
            color,
        );

        match notify {
            SliderNotify::Change => *value != old_value,
            SliderNotify::Finalize => outcome.active.is_just_inactive(),
        }
    }
}
