//! Draggable handles, grabbed with one hand or two

use bitflags::bitflags;
use glam::{Quat, Vec2, Vec3};
use tracing::error;

use super::Ui;
use crate::backend::{UiSound, UiVisual};
use crate::id::IdHash;
use crate::input::Handed;
use crate::interactor::{InteractorEvents, InteractorId};
use crate::spatial::{look_at, look_at_up, rotation_of, Bounds, Pose};
use crate::theme::{Color, UiColor};

/// Per-frame pull of the handle position toward its destination
const POSITION_BLEND: f32 = 0.6;
/// Per-frame pull of the handle orientation toward its destination
const ORIENTATION_BLEND: f32 = 0.4;

/// Ray grabs closer than this to the head are left to direct touch
const FAR_MIN_HEAD_DIST: f32 = 0.65;
/// Ray grabs closer than this to the hand are left to direct touch
const FAR_MIN_HAND_DIST: f32 = 0.2;
/// Priority penalty that keeps ray grabs behind direct touch
const FAR_PRIORITY: f32 = 10.0;

/// How a grabbed handle follows the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveType {
    /// Follow the hand's position and rotation exactly
    Exact,
    /// Follow position, turning to face the user
    #[default]
    FaceUser,
    /// Follow position only
    PosOnly,
    /// Can't be moved
    None,
}

bitflags! {
    /// Hand gestures that may grab a handle
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UiGesture: u8 {
        const PINCH = 1 << 0;
        const GRIP  = 1 << 1;
    }
}

impl Default for UiGesture {
    fn default() -> Self {
        UiGesture::PINCH
    }
}

impl UiGesture {
    fn events(self) -> InteractorEvents {
        let mut events = InteractorEvents::empty();
        if self.contains(UiGesture::PINCH) {
            events |= InteractorEvents::PINCH;
        }
        if self.contains(UiGesture::GRIP) {
            events |= InteractorEvents::GRIP;
        }
        events
    }
}

/// Where the handle and the grabbing hands were when a grab started,
/// all in the handle's parent space
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct GrabBaselines {
    two_hand_pos: Vec3,
    two_hand_rot: Quat,
    two_hand_handle_pos: Vec3,
    two_hand_handle_rot: Quat,
    handle_pos: [Vec3; 2],
    handle_rot: [Quat; 2],
    palm_pos: [Vec3; 2],
    palm_rot: [Quat; 2],
}

impl GrabBaselines {
    fn rebase_hand(&mut self, hand: usize, pose: &Pose, palm_pos: Vec3, palm_rot: Quat) {
        self.handle_pos[hand] = pose.position;
        self.handle_rot[hand] = pose.orientation;
        self.palm_pos[hand] = palm_pos;
        self.palm_rot[hand] = palm_rot;
    }
}

impl Ui {
    /// Begin a handle that moves `pose` when grabbed. Pushes a surface at
    /// the pose; close it with [`Ui::handle_end`]. Returns true while held.
    pub fn handle_begin(
        &mut self,
        label: &str,
        pose: &mut Pose,
        bounds: Bounds,
        draw: bool,
        move_type: MoveType,
        gestures: UiGesture,
    ) -> bool {
        let id = self.ids.stack_hash(label);
        self.handle_begin_id(id, pose, bounds, draw, move_type, gestures)
    }

    pub fn handle_end(&mut self) {
        self.pop_surface();
    }

    pub(super) fn handle_begin_id(
        &mut self,
        id: IdHash,
        pose: &mut Pose,
        bounds: Bounds,
        draw: bool,
        move_type: MoveType,
        gestures: UiGesture,
    ) -> bool {
        let mut result = false;
        let mut color_blend = 0.0;

        self.mark_element(id);
        let parent_to_local = self.hierarchy.to_local();
        let parent_to_world = self.hierarchy.to_world();
        let parent_rotation = rotation_of(&parent_to_local);
        self.push_surface(*pose, Vec3::ZERO, Vec2::ZERO);

        // A zero-size handle neither draws nor interacts
        if bounds.dimensions.length_squared() == 0.0 {
            return false;
        }

        let events = gestures.events();
        if !self.is_enabled() || move_type == MoveType::None {
            self.interactors.set_focus(None, id, false, 0.0);
        } else {
            let mut local_pt = [Vec3::ZERO; 2];

            for hand in Handed::ALL {
                let i = InteractorId::hand(hand);
                let h = hand.index();
                let actor = self.interactors.get(i).clone();
                if !actor.events.intersects(events) || self.interactors.is_preoccupied(i, id, false) {
                    continue;
                }

                let hand_input = *self.input.hand(hand);
                let pointer = *self.input.pointer(hand);
                local_pt[h] = parent_to_local.transform_point3(hand_input.pinch_point);

                let mut attention = actor.active_prev == id;
                let mut far = false;
                let mut attention_dist = 0.0;
                if actor.is_tracked() && self.in_box(actor.finger, actor.thumb, actor.radius, &bounds) {
                    attention = true;
                    attention_dist = bounds.sdf(actor.pinch_pt) + actor.pinch_pt.distance(actor.thumb);
                } else if actor.ray_enabled && self.far_interact && pointer.tracked {
                    let local_ray = self.hierarchy.to_local_ray(&pointer.ray);
                    if bounds.ray_intersect(&local_ray).is_some() {
                        let head_local = self.hierarchy.to_local_point(self.input.head.position);
                        let head_dist = bounds.sdf(head_local);
                        let hand_dist = bounds.sdf(actor.pinch_pt);
                        if head_dist < FAR_MIN_HEAD_DIST || hand_dist < FAR_MIN_HAND_DIST {
                            // Within touching distance: claim nothing so
                            // the ray can't grab it
                            self.interactors.set_focus(Some(i), IdHash::NONE, true, FAR_PRIORITY);
                            self.interactors.get_mut(i).ray_discard = true;
                        } else {
                            attention = true;
                            far = true;
                            attention_dist = head_dist + FAR_PRIORITY;
                        }
                    }
                }
                let focused = self.interactors.set_focus(Some(i), id, attention, attention_dist);

                // From the second frame of a far grab, hold the handle by
                // its origin and draw a tether to it
                let mut from_pt = local_pt[h];
                if far && focused.is_active() && !focused.is_just_active() {
                    let start = self.hierarchy.to_local_point(pointer.ray.origin);
                    let to_world = self.hierarchy.to_world();
                    self.draw_line(
                        to_world.transform_point3(start * 0.75),
                        to_world.transform_point3(Vec3::ZERO),
                        Color::WHITE,
                        0.002,
                    );
                    from_pt = parent_to_local.transform_point3(self.hierarchy.to_world_point(Vec3::ZERO));
                }

                // Wait a frame after focus so the first frame of focus
                // can't nudge the handle
                if actor.focused_prev != id {
                    continue;
                }
                color_blend = 1.0;
                let palm_rot = parent_rotation * actor.orientation;
                if actor.pinch_state.is_just_active() {
                    self.play_sound(UiSound::Grab, actor.finger_world);
                    self.interactors.get_mut(i).active = id;
                    self.grab.rebase_hand(h, pose, from_pt, palm_rot);
                }
                if actor.active_prev != id && self.interactors.get(i).active != id {
                    continue;
                }

                result = true;
                let current = self.interactors.get_mut(i);
                current.active = id;
                current.focused = id;

                let left = self.interactors.get(InteractorId::LEFT_HAND);
                let right = self.interactors.get(InteractorId::RIGHT_HAND);
                let two_handed = (left.active_prev == id && right.active_prev == id)
                    || (left.active == id && right.active == id);
                let any_pinch_started = left.pinch_state.is_just_active() || right.pinch_state.is_just_active();
                let any_pinch_ended = left.pinch_state.is_just_inactive() || right.pinch_state.is_just_inactive();

                if two_handed {
                    // The second hand drives a two-handed grab
                    if hand == Handed::Right {
                        let look = look_at(local_pt[0], local_pt[1]);
                        let mid = (local_pt[0] + local_pt[1]) * 0.5;
                        if any_pinch_started {
                            self.grab.two_hand_pos = mid;
                            self.grab.two_hand_rot = look;
                            self.grab.two_hand_handle_pos = pose.position;
                            self.grab.two_hand_handle_rot = pose.orientation;
                        }

                        let delta = match move_type {
                            MoveType::Exact | MoveType::FaceUser => look * self.grab.two_hand_rot.inverse(),
                            MoveType::PosOnly => Quat::IDENTITY,
                            MoveType::None => {
                                error!(?move_type, "Unimplemented move type");
                                Quat::IDENTITY
                            }
                        };

                        let tether = Color::WHITE.with_alpha(0.5);
                        let world_mid = parent_to_world.transform_point3(mid);
                        self.draw_line(parent_to_world.transform_point3(local_pt[0]), world_mid, tether, 0.001);
                        self.draw_line(world_mid, parent_to_world.transform_point3(local_pt[1]), tether, 0.001);

                        let dest_pos = mid + delta * (self.grab.two_hand_handle_pos - self.grab.two_hand_pos);
                        let dest_rot = delta * self.grab.two_hand_handle_rot;
                        pose.position = pose.position.lerp(dest_pos, POSITION_BLEND);
                        pose.orientation = pose.orientation.slerp(dest_rot, ORIENTATION_BLEND);
                    }

                    // One hand letting go: restart the remaining hand from
                    // here so it doesn't pop back to its old grab
                    if any_pinch_ended {
                        self.grab.rebase_hand(h, pose, from_pt, palm_rot);
                    }
                } else {
                    let delta = match move_type {
                        MoveType::Exact => palm_rot * self.grab.palm_rot[h].inverse(),
                        MoveType::FaceUser => {
                            let head_local = parent_to_local.transform_point3(self.input.head.position);
                            let head_xz = Vec2::new(head_local.x, head_local.z);
                            let hand_xz = Vec2::new(local_pt[h].x, local_pt[h].z);
                            let straight_on = (head_xz.distance_squared(hand_xz) / 0.1).min(1.0);
                            let center = pose.transform_point(bounds.center);
                            let look_from = local_pt[h].lerp(center, straight_on);
                            let up = parent_to_local.transform_vector3(Vec3::Y);
                            look_at_up(look_from, head_local, up) * self.grab.handle_rot[h].inverse()
                        }
                        MoveType::PosOnly => Quat::IDENTITY,
                        MoveType::None => {
                            error!(?move_type, "Unimplemented move type");
                            Quat::IDENTITY
                        }
                    };

                    let dest_pos = local_pt[h] + delta * (self.grab.handle_pos[h] - self.grab.palm_pos[h]);
                    let dest_rot = delta * self.grab.handle_rot[h];
                    pose.position = pose.position.lerp(dest_pos, POSITION_BLEND);
                    pose.orientation = pose.orientation.slerp(dest_rot, ORIENTATION_BLEND);
                }

                if actor.pinch_state.is_just_inactive() {
                    self.interactors.get_mut(i).active = IdHash::NONE;
                    self.play_sound(UiSound::Release, actor.finger_world);
                }
                self.pop_surface();
                self.push_surface(*pose, Vec3::ZERO, Vec2::ZERO);
            }
        }

        if draw {
            let color = self.element_color(UiColor::Primary, 1.0 + color_blend);
            self.draw_element(UiVisual::Handle, bounds.top_left(), bounds.dimensions, color);
            self.layout.next_line();
        }
        result
    }
}
