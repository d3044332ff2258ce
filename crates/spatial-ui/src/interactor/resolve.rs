//! Focus and activation state machine

use glam::Vec3;

use super::{Interactor, InteractorId, InteractorKind, InteractorRegistry, INTERACTOR_COUNT};
use crate::id::IdHash;
use crate::spatial::{Bounds, Ray};
use crate::state::ButtonState;

/// Where an interactor touched a box, and how strongly it claims it.
/// Lower priority wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    pub at: Vec3,
    pub priority: f32,
}

impl Interactor {
    /// Hit-test against a box in the current local frame. Points sweep a
    /// capsule from last frame to this one; rays cast along their segment.
    pub fn check_box(&self, bounds: &Bounds) -> Option<BoxHit> {
        if !self.is_tracked() {
            return None;
        }
        match self.kind {
            InteractorKind::Point => {
                if !bounds.capsule_contains(self.finger_prev, self.finger, self.radius) {
                    return None;
                }
                Some(BoxHit {
                    at: self.finger,
                    priority: bounds.sdf_manhattan(self.finger),
                })
            }
            InteractorKind::Ray => {
                let ray = Ray::new(self.finger_prev, self.finger - self.finger_prev);
                let dist = bounds.ray_intersect_dist(&ray)?;
                if dist > 1.0 {
                    return None;
                }
                let at = ray.at(dist);
                Some(BoxHit {
                    at,
                    priority: bounds.sdf_manhattan(at) + ray.origin.distance_squared(at),
                })
            }
        }
    }

    /// Swept fingertip test used by focus-only volumes
    pub fn poke_in(&self, bounds: &Bounds) -> bool {
        self.is_tracked() && bounds.capsule_contains(self.finger, self.finger_prev, self.radius)
    }

    /// Thumb-to-finger test used by pinch volumes
    pub fn pinch_in(&self, bounds: &Bounds) -> bool {
        self.is_tracked() && bounds.capsule_contains(self.finger, self.thumb, self.radius)
    }
}

impl InteractorRegistry {
    /// Offer `id` as this interactor's focus for the frame. A candidate
    /// wins when its priority is no worse than the best so far, so among
    /// equal priorities the last caller wins.
    ///
    /// With no interactor, the one that was active on `id` last frame is
    /// used; if there is none the result is inactive.
    pub fn set_focus(
        &mut self,
        interactor: Option<InteractorId>,
        id: IdHash,
        candidate: bool,
        priority: f32,
    ) -> ButtonState {
        let Some(interactor) = interactor.or_else(|| self.last_active(id)) else {
            return ButtonState::INACTIVE;
        };
        let actor = self.get_mut(interactor);
        let was_focused = actor.focused_prev == id;
        let mut is_focused = false;

        if candidate && priority <= actor.focus_priority {
            is_focused = true;
            actor.focused = id;
            actor.focus_priority = priority;
        }
        ButtonState::from_transition(was_focused, is_focused)
    }

    /// Try to make `id` this interactor's active element. Activation only
    /// sticks to an element that was active last frame or that this
    /// interactor is or was focused on.
    pub fn set_active(
        &mut self,
        interactor: Option<InteractorId>,
        id: IdHash,
        candidate: bool,
    ) -> ButtonState {
        let Some(interactor) = interactor else {
            return ButtonState::INACTIVE;
        };
        let actor = self.get_mut(interactor);
        let was_active = actor.active_prev == id;
        let mut is_active = false;

        if candidate && (was_active || actor.focused_prev == id || actor.focused == id) {
            is_active = true;
            actor.active = id;
        }
        ButtonState::from_transition(was_active, is_active)
    }

    /// Is this interactor already committed to some other element?
    pub fn is_preoccupied(&self, interactor: InteractorId, id: IdHash, include_focused: bool) -> bool {
        let actor = self.get(interactor);
        (include_focused && actor.focused_prev.is_some() && actor.focused_prev != id)
            || (actor.active_prev.is_some() && actor.active_prev != id)
    }

    /// First interactor that was active on `id` last frame
    pub fn last_active(&self, id: IdHash) -> Option<InteractorId> {
        (0..INTERACTOR_COUNT)
            .map(InteractorId)
            .find(|&i| self.get(i).active_prev == id)
    }

    /// First interactor that was focused on `id` last frame
    pub fn last_focused(&self, id: IdHash) -> Option<InteractorId> {
        (0..INTERACTOR_COUNT)
            .map(InteractorId)
            .find(|&i| self.get(i).focused_prev == id)
    }

    /// Was any interactor focused on `id` last frame?
    pub fn id_focused(&self, id: IdHash) -> bool {
        self.last_focused(id).is_some()
    }

    /// Should the text field `focused_id` lose the keyboard? True when some
    /// interactor is busy with a different element that doesn't preserve
    /// the keyboard.
    pub fn keyboard_focus_lost(&self, focused_id: IdHash) -> bool {
        self.iter().any(|(i, actor)| {
            self.is_preoccupied(i, focused_id, false)
                && actor.focused_prev.is_some()
                && !self.preserves_keyboard(actor.focused_prev)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FrameInput, HandInput, Handed};
    use glam::Mat4;

    const A: IdHash = IdHash(100);
    const B: IdHash = IdHash(200);
    const RIGHT: Option<InteractorId> = Some(InteractorId::RIGHT_HAND);

    fn registry() -> InteractorRegistry {
        let mut reg = InteractorRegistry::new();
        let mut input = FrameInput::default();
        *input.hand_mut(Handed::Right) = HandInput::tracked_at(Vec3::ZERO);
        reg.refresh(&input, &Mat4::IDENTITY);
        reg
    }

    fn next_frame(reg: &mut InteractorRegistry) {
        let mut input = FrameInput::default();
        *input.hand_mut(Handed::Right) = HandInput::tracked_at(Vec3::ZERO);
        reg.refresh(&input, &Mat4::IDENTITY);
    }

    #[test]
    fn test_lower_priority_wins() {
        let mut reg = registry();
        reg.set_focus(RIGHT, A, true, 0.5);
        let b = reg.set_focus(RIGHT, B, true, 0.1);
        assert!(b.is_active());
        assert_eq!(reg.get(InteractorId::RIGHT_HAND).focused, B);

        let worse = reg.set_focus(RIGHT, A, true, 0.3);
        assert!(!worse.is_active());
        assert_eq!(reg.get(InteractorId::RIGHT_HAND).focused, B);
    }

    #[test]
    fn test_equal_priority_later_call_wins() {
        let mut reg = registry();
        reg.set_focus(RIGHT, A, true, 0.2);
        reg.set_focus(RIGHT, B, true, 0.2);
        assert_eq!(reg.get(InteractorId::RIGHT_HAND).focused, B);
    }

    #[test]
    fn test_focus_transitions_across_frames() {
        let mut reg = registry();
        let first = reg.set_focus(RIGHT, A, true, 0.0);
        assert!(first.is_just_active());
        next_frame(&mut reg);
        let held = reg.set_focus(RIGHT, A, true, 0.0);
        assert_eq!(held, ButtonState::ACTIVE);
        next_frame(&mut reg);
        let lost = reg.set_focus(RIGHT, A, false, 0.0);
        assert_eq!(lost, ButtonState::JUST_INACTIVE);
    }

    #[test]
    fn test_activation_requires_focus() {
        let mut reg = registry();
        let denied = reg.set_active(RIGHT, A, true);
        assert_eq!(denied, ButtonState::INACTIVE);
        assert_eq!(reg.get(InteractorId::RIGHT_HAND).active, IdHash::NONE);

        reg.set_focus(RIGHT, A, true, 0.0);
        let granted = reg.set_active(RIGHT, A, true);
        assert!(granted.is_just_active());

        // Still active next frame without focus, since it was active before
        next_frame(&mut reg);
        assert_eq!(reg.set_active(RIGHT, A, true), ButtonState::ACTIVE);
        assert_eq!(reg.set_active(None, A, true), ButtonState::INACTIVE);
    }

    #[test]
    fn test_set_focus_without_interactor_uses_last_active() {
        let mut reg = registry();
        reg.set_focus(RIGHT, A, true, 0.0);
        reg.set_active(RIGHT, A, true);
        next_frame(&mut reg);
        let state = reg.set_focus(None, A, false, 0.0);
        assert!(state.is_just_inactive());
        assert_eq!(reg.set_focus(None, B, true, 0.0), ButtonState::INACTIVE);
    }

    #[test]
    fn test_preoccupied() {
        let mut reg = registry();
        reg.set_focus(RIGHT, A, true, 0.0);
        next_frame(&mut reg);
        let right = InteractorId::RIGHT_HAND;
        assert!(reg.is_preoccupied(right, B, true));
        assert!(!reg.is_preoccupied(right, B, false));
        assert!(!reg.is_preoccupied(right, A, true));

        reg.set_active(Some(right), A, true);
        next_frame(&mut reg);
        assert!(reg.is_preoccupied(right, B, false));
        assert_eq!(reg.last_active(A), Some(right));
    }

    #[test]
    fn test_check_box_point_priority() {
        let reg = registry();
        let actor = reg.get(InteractorId::RIGHT_HAND);
        let near_center = Bounds::new(Vec3::ZERO, Vec3::splat(0.1));
        let off_center = Bounds::new(Vec3::new(0.04, 0.0, 0.0), Vec3::splat(0.1));
        let a = actor.check_box(&near_center).unwrap();
        let b = actor.check_box(&off_center).unwrap();
        assert!(a.priority < b.priority);
        assert!(actor.check_box(&Bounds::new(Vec3::X, Vec3::splat(0.1))).is_none());
        assert!(reg.get(InteractorId::LEFT_HAND).check_box(&near_center).is_none());
    }

    #[test]
    fn test_check_box_ray() {
        let mut reg = InteractorRegistry::new();
        let mut input = FrameInput::default();
        input.pointers[0].tracked = true;
        input.pointers[0].ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        reg.refresh(&input, &Mat4::IDENTITY);
        let ray = reg.get(InteractorId::LEFT_RAY);
        let hit = ray
            .check_box(&Bounds::new(Vec3::new(0.0, 0.0, -1.0), Vec3::splat(0.2)))
            .unwrap();
        assert!((hit.at - Vec3::new(0.0, 0.0, -0.9)).length() < 1e-4);
        assert!(ray.check_box(&Bounds::new(Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.2))).is_none());
    }

    #[test]
    fn test_keyboard_focus_lost() {
        let mut reg = registry();
        let field = IdHash(1);
        let other = IdHash(2);
        reg.set_focus(RIGHT, other, true, 0.0);
        reg.set_active(RIGHT, other, true);
        next_frame(&mut reg);
        assert!(reg.keyboard_focus_lost(field));

        // The same interaction, but on an element that preserves the keyboard
        let mut reg = registry();
        reg.preserve_keyboard_add(other);
        reg.set_focus(RIGHT, other, true, 0.0);
        reg.set_active(RIGHT, other, true);
        next_frame(&mut reg);
        assert!(!reg.keyboard_focus_lost(field));
    }
}
