//! Hot zones without visuals

use glam::Vec3;

use super::interaction::BoxTest;
use super::Ui;
use crate::id::IdHash;
use crate::input::Handed;
use crate::interactor::InteractorId;
use crate::spatial::Bounds;
use crate::state::ButtonState;

/// What confirms an interaction with a volume or slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirm {
    /// Touching it is enough
    #[default]
    Push,
    /// The hand has to pinch while inside
    Pinch,
}

/// Result of [`Ui::volumei_at`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeOutcome {
    pub active: ButtonState,
    pub focus: ButtonState,
    pub interactor: Option<InteractorId>,
}

impl Ui {
    /// Focus-only hot zone. Returns true on the frame any interactor
    /// starts touching it.
    pub fn volume_at(&mut self, label: &str, bounds: Bounds) -> bool {
        let id = self.ids.stack_hash(label);
        self.mark_element(id);
        let padding = self.settings.padding;

        let mut entered = false;
        for i in InteractorId::ALL {
            let actor = self.interactors.get(i);
            let mut volume = bounds;
            if actor.focused_prev == id {
                volume.dimensions += Vec3::splat(padding);
            }
            let (a, b, radius) = (actor.finger, actor.finger_prev, actor.radius);
            let in_box = actor.is_tracked() && self.in_box(a, b, radius, &volume);
            if self.interactors.set_focus(Some(i), id, in_box, 0.0).is_just_active() {
                entered = true;
            }
        }
        entered
    }

    /// Hot zone with focus and activation. With [`Confirm::Push`] touching
    /// activates it; with [`Confirm::Pinch`] a pinch inside does, and the
    /// pinch keeps it active even after the hand drifts out.
    pub fn volumei_at(&mut self, label: &str, bounds: Bounds, confirm: Confirm) -> VolumeOutcome {
        let id = self.ids.stack_hash(label);
        self.volume_behavior(id, bounds, confirm)
    }

    pub(super) fn volume_behavior(&mut self, id: IdHash, bounds: Bounds, confirm: Confirm) -> VolumeOutcome {
        let test = match confirm {
            Confirm::Push => BoxTest::Poke,
            Confirm::Pinch => BoxTest::Pinch,
        };
        let hit = self.box_1h(id, bounds, bounds, test);

        let mut focus = hit.focus;
        let mut active = focus.is_active() && !focus.is_just_inactive();
        if confirm == Confirm::Pinch {
            if let Some(i) = hit.interactor {
                active = self.interactors.get(i).pinch_state.is_active();
                focus = self.interactors.set_focus(Some(i), id, active || focus.is_active(), 0.0);
            }
        }
        VolumeOutcome {
            active: self.interactors.set_active(hit.interactor, id, active),
            focus,
            interactor: hit.interactor,
        }
    }

    /// Pinch state of any hand inside `bounds` that isn't already busy with
    /// some element. Has no id, so it never claims focus.
    pub fn interact_volume_at(&mut self, bounds: Bounds) -> (ButtonState, Option<Handed>) {
        let mut result = (ButtonState::INACTIVE, None);
        for i in InteractorId::ALL {
            let actor = self.interactors.get(i);
            if actor.active_prev.is_some() || actor.focused_prev.is_some() {
                continue;
            }
            let (a, b, radius, pinch) = (actor.finger, actor.finger_prev, actor.radius, actor.pinch_state);
            if actor.is_tracked() && self.in_box(a, b, radius, &bounds) && pinch != ButtonState::INACTIVE {
                result = (pinch, Some(i.handed()));
            }
        }
        result
    }
}
