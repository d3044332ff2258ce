//! Interactor table, per-frame refresh and coordinate layers

use glam::{Mat4, Quat, Vec3};
use tracing::{trace, warn};

use super::{InteractorEvents, InteractorId, InteractorKind, INTERACTOR_COUNT};
use crate::id::IdHash;
use crate::input::FrameInput;
use crate::state::ButtonState;

/// Distance a hand ray reaches, in meters
const RAY_REACH: f32 = 100.0;

/// One pointing mechanism. World-space fields come straight from input;
/// the unsuffixed fields are the same points in the current surface's
/// local space.
#[derive(Debug, Clone)]
pub struct Interactor {
    pub kind: InteractorKind,
    pub events: InteractorEvents,
    pub tracked: ButtonState,
    pub pinch_state: ButtonState,
    /// Collision radius of the control point
    pub radius: f32,
    /// Palm or pointer orientation, world space
    pub orientation: Quat,

    pub finger_world: Vec3,
    pub finger_world_prev: Vec3,
    pub thumb_world: Vec3,
    pub pinch_pt_world: Vec3,
    pub pinch_pt_world_prev: Vec3,

    pub finger: Vec3,
    pub finger_prev: Vec3,
    pub thumb: Vec3,
    pub pinch_pt: Vec3,
    pub pinch_pt_prev: Vec3,

    pub focused: IdHash,
    pub focused_prev: IdHash,
    pub focused_prev_prev: IdHash,
    pub active: IdHash,
    pub active_prev: IdHash,
    /// Best (lowest) priority claimed this frame
    pub focus_priority: f32,

    /// Far interaction is allowed this frame
    pub ray_enabled: bool,
    /// Far interaction was vetoed by a nearby element this frame
    pub ray_discard: bool,
}

impl Interactor {
    fn new(kind: InteractorKind) -> Self {
        Self {
            kind,
            events: InteractorEvents::POKE | InteractorEvents::PINCH,
            tracked: ButtonState::INACTIVE,
            pinch_state: ButtonState::INACTIVE,
            radius: 0.0,
            orientation: Quat::IDENTITY,
            finger_world: Vec3::ZERO,
            finger_world_prev: Vec3::ZERO,
            thumb_world: Vec3::ZERO,
            pinch_pt_world: Vec3::ZERO,
            pinch_pt_world_prev: Vec3::ZERO,
            finger: Vec3::ZERO,
            finger_prev: Vec3::ZERO,
            thumb: Vec3::ZERO,
            pinch_pt: Vec3::ZERO,
            pinch_pt_prev: Vec3::ZERO,
            focused: IdHash::NONE,
            focused_prev: IdHash::NONE,
            focused_prev_prev: IdHash::NONE,
            active: IdHash::NONE,
            active_prev: IdHash::NONE,
            focus_priority: f32::MAX,
            ray_enabled: false,
            ray_discard: false,
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked.is_active()
    }

    fn points(&self) -> LayerPoints {
        LayerPoints {
            finger: self.finger,
            finger_prev: self.finger_prev,
            thumb: self.thumb,
            pinch_pt: self.pinch_pt,
            pinch_pt_prev: self.pinch_pt_prev,
        }
    }

    fn set_points(&mut self, points: &LayerPoints) {
        self.finger = points.finger;
        self.finger_prev = points.finger_prev;
        self.thumb = points.thumb;
        self.pinch_pt = points.pinch_pt;
        self.pinch_pt_prev = points.pinch_pt_prev;
    }

    fn world_points(&self) -> LayerPoints {
        LayerPoints {
            finger: self.finger_world,
            finger_prev: self.finger_world_prev,
            thumb: self.thumb_world,
            pinch_pt: self.pinch_pt_world,
            pinch_pt_prev: self.pinch_pt_world_prev,
        }
    }

    fn localize(&mut self, to_local: &Mat4) {
        let world = self.world_points();
        self.set_points(&LayerPoints {
            finger: to_local.transform_point3(world.finger),
            finger_prev: to_local.transform_point3(world.finger_prev),
            thumb: to_local.transform_point3(world.thumb),
            pinch_pt: to_local.transform_point3(world.pinch_pt),
            pinch_pt_prev: to_local.transform_point3(world.pinch_pt_prev),
        });
    }
}

#[derive(Debug, Clone, Copy)]
struct LayerPoints {
    finger: Vec3,
    finger_prev: Vec3,
    thumb: Vec3,
    pinch_pt: Vec3,
    pinch_pt_prev: Vec3,
}

/// Interactor control points as seen from one pushed surface
#[derive(Debug, Clone)]
struct Layer {
    points: [LayerPoints; INTERACTOR_COUNT],
}

/// Owns the interactor table, the per-surface coordinate layers and the
/// double-buffered set of ids that keep the keyboard open
#[derive(Debug, Clone)]
pub struct InteractorRegistry {
    interactors: [Interactor; INTERACTOR_COUNT],
    layers: Vec<Layer>,
    raw_tracked: [bool; INTERACTOR_COUNT],
    raw_pinched: [bool; INTERACTOR_COUNT],
    preserve_keyboard: [Vec<IdHash>; 2],
    preserve_read: usize,
}

impl Default for InteractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractorRegistry {
    pub fn new() -> Self {
        Self {
            interactors: [
                Interactor::new(InteractorKind::Point),
                Interactor::new(InteractorKind::Point),
                Interactor::new(InteractorKind::Ray),
                Interactor::new(InteractorKind::Ray),
            ],
            layers: Vec::new(),
            raw_tracked: [false; INTERACTOR_COUNT],
            raw_pinched: [false; INTERACTOR_COUNT],
            preserve_keyboard: [Vec::new(), Vec::new()],
            preserve_read: 0,
        }
    }

    pub fn get(&self, id: InteractorId) -> &Interactor {
        &self.interactors[id.0]
    }

    pub fn get_mut(&mut self, id: InteractorId) -> &mut Interactor {
        &mut self.interactors[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (InteractorId, &Interactor)> {
        self.interactors
            .iter()
            .enumerate()
            .map(|(i, actor)| (InteractorId(i), actor))
    }

    /// Number of coordinate layers currently pushed
    pub fn layer_depth(&self) -> usize {
        self.layers.len()
    }

    /// Pull this frame's input into the table and rotate current state into
    /// previous state. Must run once, before any widget, at the root of the
    /// hierarchy (`to_local` is the root's world-to-local transform).
    pub fn refresh(&mut self, input: &FrameInput, to_local: &Mat4) {
        if !self.layers.is_empty() {
            warn!(
                layers = self.layers.len(),
                "Interactor layers left open from the previous frame"
            );
            self.layers.clear();
        }

        for (i, hand) in input.hands.iter().enumerate() {
            let actor = &mut self.interactors[i];
            actor.finger_world_prev = actor.finger_world;
            actor.finger_world = hand.fingertip;
            actor.thumb_world = hand.thumb_tip;
            actor.pinch_pt_world_prev = actor.pinch_pt_world;
            actor.pinch_pt_world = hand.pinch_point;
            actor.pinch_state = ButtonState::from_transition(self.raw_pinched[i], hand.pinched);
            actor.radius = hand.fingertip_radius;
            actor.orientation = hand.palm_orientation;
            actor.kind = InteractorKind::Point;
            actor.events = InteractorEvents::POKE | InteractorEvents::PINCH;
            actor.tracked = ButtonState::from_transition(self.raw_tracked[i], hand.tracked);
            self.raw_pinched[i] = hand.pinched;
            self.raw_tracked[i] = hand.tracked;
        }

        for (p, pointer) in input.pointers.iter().enumerate() {
            let i = p + 2;
            let actor = &mut self.interactors[i];
            let origin = pointer.ray.origin;
            actor.finger_world_prev = origin;
            actor.finger_world = origin + pointer.ray.direction.normalize_or_zero() * RAY_REACH;
            actor.thumb_world = origin;
            actor.pinch_pt_world_prev = actor.pinch_pt_world;
            actor.pinch_pt_world = origin;
            actor.pinch_state = ButtonState::from_transition(self.raw_pinched[i], pointer.pressed);
            actor.radius = 0.0;
            actor.orientation = pointer.orientation;
            actor.kind = InteractorKind::Ray;
            actor.events = InteractorEvents::POKE | InteractorEvents::PINCH;
            actor.tracked = ButtonState::from_transition(self.raw_tracked[i], pointer.tracked);
            self.raw_pinched[i] = pointer.pressed;
            self.raw_tracked[i] = pointer.tracked;
        }

        let head = input.head.position;
        for actor in self.interactors.iter_mut() {
            actor.focused_prev_prev = actor.focused_prev;
            actor.focused_prev = actor.focused;
            actor.active_prev = actor.active;
            actor.focus_priority = f32::MAX;
            actor.focused = IdHash::NONE;
            actor.active = IdHash::NONE;

            // Only allow rays while the hand moves away from the face
            let motion = actor.finger_world - actor.finger_world_prev;
            let to_head = head - actor.finger_world_prev;
            actor.ray_enabled = actor.is_tracked() && motion.dot(to_head) < 0.0;

            // Don't let a hand popping into tracking sweep through elements.
            // Ray segments always run from origin to tip.
            if actor.kind == InteractorKind::Point && actor.tracked.is_just_active() {
                actor.finger_world_prev = actor.finger_world;
                actor.pinch_pt_world_prev = actor.pinch_pt_world;
            }
            actor.localize(to_local);
            actor.ray_discard = false;
        }

        self.preserve_keyboard[self.preserve_read].clear();
        self.preserve_read ^= 1;
        trace!(
            preserved = self.preserve_keyboard[self.preserve_read].len(),
            "Interactors refreshed"
        );
    }

    /// Re-express every interactor in a new local frame and remember it
    pub fn push_layer(&mut self, to_local: &Mat4) {
        for actor in self.interactors.iter_mut() {
            actor.localize(to_local);
        }
        let points = std::array::from_fn(|i| self.interactors[i].points());
        self.layers.push(Layer { points });
    }

    /// Drop the innermost layer and restore the enclosing layer's points,
    /// or world space when none remain
    pub fn pop_layer(&mut self) {
        if self.layers.pop().is_none() {
            warn!("Tried to pop too many interactor layers! Do you have a push/pop mismatch?");
            return;
        }
        match self.layers.last() {
            Some(layer) => {
                for (actor, points) in self.interactors.iter_mut().zip(layer.points.iter()) {
                    actor.set_points(points);
                }
            }
            None => {
                for actor in self.interactors.iter_mut() {
                    let world = actor.world_points();
                    actor.set_points(&world);
                }
            }
        }
    }

    /// Mark `id` as exempt from closing the keyboard next frame
    pub fn preserve_keyboard_add(&mut self, id: IdHash) {
        let write = self.preserve_read ^ 1;
        if !self.preserve_keyboard[write].contains(&id) {
            self.preserve_keyboard[write].push(id);
        }
    }

    /// Was `id` marked as keyboard-preserving last frame?
    pub fn preserves_keyboard(&self, id: IdHash) -> bool {
        self.preserve_keyboard[self.preserve_read].contains(&id)
    }
}
