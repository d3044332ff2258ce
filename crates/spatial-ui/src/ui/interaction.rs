//! Single-interactor hit tests shared by the widgets

use glam::{Vec2, Vec3};

use super::Ui;
use crate::id::IdHash;
use crate::interactor::{InteractorEvents, InteractorId};
use crate::spatial::Bounds;
use crate::state::ButtonState;

/// Thickness of the detection plate in front of a button
const PLATE_THICKNESS: f32 = 0.0001;

/// Outcome of hit-testing one element against every interactor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub focus: ButtonState,
    /// The interactor that reported a focus change this frame, else the one
    /// focused on the element last frame
    pub interactor: Option<InteractorId>,
    /// Local hit position reported by that interactor
    pub at: Vec3,
}

impl Interaction {
    fn none() -> Self {
        Self {
            focus: ButtonState::INACTIVE,
            interactor: None,
            at: Vec3::ZERO,
        }
    }
}

/// Which pair of points is swept through a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BoxTest {
    /// Fingertip from last frame to this one
    Poke,
    /// Fingertip to thumb tip
    Pinch,
}

impl Ui {
    /// Capsule test, drawing the volume when debug volumes are on
    pub(super) fn in_box(&mut self, a: Vec3, b: Vec3, radius: f32, bounds: &Bounds) -> bool {
        self.debug_volume(bounds);
        bounds.capsule_contains(a, b, radius)
    }

    /// Flat plate test used by buttons. Before focus, only a thin slab just
    /// in front of the plate detects, so fingers can't press from the side
    /// or behind. Once focused, a deep box reaching through the plate
    /// tracks the finger.
    pub(super) fn plate_1h(
        &mut self,
        id: IdHash,
        events: InteractorEvents,
        plate_start: Vec3,
        plate_size: Vec2,
    ) -> Interaction {
        let mut result = Interaction::none();
        if !self.is_enabled() {
            return result;
        }

        for i in InteractorId::ALL {
            let actor = self.interactors.get(i);
            if !actor.events.intersects(events) || self.interactors.is_preoccupied(i, id, false) {
                continue;
            }

            let radius = actor.radius;
            let bounds = if actor.focused_prev != id {
                Bounds::from_top_left(
                    Vec3::new(plate_start.x, plate_start.y, plate_start.z - radius * 2.0),
                    Vec3::new(plate_size.x, plate_size.y, PLATE_THICKNESS),
                )
            } else {
                let depth = (8.0 * radius).max(PLATE_THICKNESS);
                Bounds::from_top_left(
                    Vec3::new(plate_start.x, plate_start.y, plate_start.z + depth - radius * 2.0),
                    Vec3::new(plate_size.x, plate_size.y, depth),
                )
            };

            if actor.is_tracked() {
                self.debug_volume(&bounds);
            }
            let hit = self.interactors.get(i).check_box(&bounds);
            let priority = hit.map_or(f32::MAX, |h| h.priority);
            let focus = self.interactors.set_focus(Some(i), id, hit.is_some(), priority);
            if focus != ButtonState::INACTIVE {
                result = Interaction {
                    focus,
                    interactor: Some(i),
                    at: hit.map_or(Vec3::ZERO, |h| h.at),
                };
            }
        }

        if result.interactor.is_none() {
            result.interactor = self.interactors.last_focused(id);
        }
        result
    }

    /// Box test with hysteresis: `unfocused` to gain focus, `focused` to
    /// keep it
    pub(super) fn box_1h(&mut self, id: IdHash, unfocused: Bounds, focused: Bounds, test: BoxTest) -> Interaction {
        self.mark_element(id);
        if !self.is_enabled() {
            return Interaction {
                focus: self.interactors.set_focus(None, id, false, 0.0),
                ..Interaction::none()
            };
        }

        let mut result = Interaction::none();
        for i in InteractorId::ALL {
            if self.interactors.is_preoccupied(i, id, false) {
                continue;
            }
            let actor = self.interactors.get(i);
            let bounds = if actor.focused_prev == id { focused } else { unfocused };
            let (a, b) = match test {
                BoxTest::Poke => (actor.finger, actor.finger_prev),
                BoxTest::Pinch => (actor.finger, actor.thumb),
            };
            let priority_point = match test {
                BoxTest::Poke => actor.finger,
                BoxTest::Pinch => actor.pinch_pt,
            };
            let pinch_spread = actor.thumb.distance(actor.pinch_pt);
            let (tracked, radius) = (actor.is_tracked(), actor.radius);

            let in_box = tracked && self.in_box(a, b, radius, &bounds);
            let priority = match (in_box, test) {
                (false, _) => f32::MAX,
                (true, BoxTest::Poke) => bounds.sdf(priority_point),
                (true, BoxTest::Pinch) => bounds.sdf(priority_point) + pinch_spread,
            };
            let focus = self.interactors.set_focus(Some(i), id, in_box, priority);
            if focus != ButtonState::INACTIVE {
                result = Interaction {
                    focus,
                    interactor: Some(i),
                    at: a,
                };
            }
        }

        if result.interactor.is_none() {
            result.interactor = self.interactors.last_focused(id);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FrameInput, HandInput};

    fn frame_with_right(ui: &mut Ui, at: Vec3) {
        let mut input = FrameInput::default();
        input.hands[1] = HandInput::tracked_at(at);
        ui.begin_frame(&input);
    }

    #[test]
    fn test_plate_detects_in_front_only() {
        let mut ui = Ui::default();
        let id = IdHash(7);
        let plate = Vec3::new(0.0, 0.0, -0.01);
        let size = Vec2::new(0.1, 0.04);

        // Finger behind the plate never gains focus
        frame_with_right(&mut ui, Vec3::new(-0.05, -0.02, 0.01));
        let hit = ui.plate_1h(id, InteractorEvents::POKE, plate, size);
        assert!(!hit.focus.is_active());

        let mut ui = Ui::default();
        frame_with_right(&mut ui, Vec3::new(-0.05, -0.02, -0.025));
        let hit = ui.plate_1h(id, InteractorEvents::POKE, plate, size);
        assert!(hit.focus.is_just_active());
        assert_eq!(hit.interactor, Some(InteractorId::RIGHT_HAND));
    }

    #[test]
    fn test_plate_ignores_masked_events() {
        let mut ui = Ui::default();
        frame_with_right(&mut ui, Vec3::new(-0.05, -0.02, -0.025));
        let hit = ui.plate_1h(
            IdHash(7),
            InteractorEvents::GRIP,
            Vec3::new(0.0, 0.0, -0.01),
            Vec2::new(0.1, 0.04),
        );
        assert_eq!(hit.interactor, None);
    }

    #[test]
    fn test_box_poke_focus_and_hysteresis() {
        let mut ui = Ui::default();
        let id = IdHash(9);
        let tight = Bounds::new(Vec3::ZERO, Vec3::splat(0.02));
        let loose = tight.grow(0.04);

        frame_with_right(&mut ui, Vec3::ZERO);
        let hit = ui.box_1h(id, tight, loose, BoxTest::Poke);
        assert!(hit.focus.is_just_active());
        ui.end_frame(
            &mut crate::backend::NullRenderBackend,
            &mut crate::backend::NullAudioBackend,
            &mut crate::backend::NullKeyboardBackend,
        );

        // Outside the tight box but inside the loose one: focus holds
        frame_with_right(&mut ui, Vec3::new(0.025, 0.0, 0.0));
        let hit = ui.box_1h(id, tight, loose, BoxTest::Poke);
        assert!(hit.focus.is_active());
        assert!(!hit.focus.is_just_active());
    }

    #[test]
    fn test_box_disabled_drops_focus() {
        let mut ui = Ui::default();
        frame_with_right(&mut ui, Vec3::ZERO);
        ui.push_enabled(false);
        let bounds = Bounds::new(Vec3::ZERO, Vec3::splat(0.02));
        let hit = ui.box_1h(IdHash(9), bounds, bounds, BoxTest::Pinch);
        assert_eq!(hit.focus, ButtonState::INACTIVE);
        ui.pop_enabled();
    }
}
