//! Hand and pointer samples

use glam::{Quat, Vec3};

use crate::spatial::Ray;

/// Which hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handed {
    Left,
    Right,
}

impl Handed {
    pub const ALL: [Handed; 2] = [Handed::Left, Handed::Right];

    pub fn index(self) -> usize {
        match self {
            Handed::Left => 0,
            Handed::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Handed::Left),
            1 => Some(Handed::Right),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Handed::Left => Handed::Right,
            Handed::Right => Handed::Left,
        }
    }
}

/// One frame of hand tracking, world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandInput {
    pub tracked: bool,
    /// Index finger tip
    pub fingertip: Vec3,
    pub thumb_tip: Vec3,
    /// Collision radius of the index finger tip
    pub fingertip_radius: f32,
    pub palm_orientation: Quat,
    /// Point between thumb and index used for pinch grabs
    pub pinch_point: Vec3,
    pub pinched: bool,
    pub gripped: bool,
}

impl Default for HandInput {
    fn default() -> Self {
        Self {
            tracked: false,
            fingertip: Vec3::ZERO,
            thumb_tip: Vec3::ZERO,
            fingertip_radius: 0.009,
            palm_orientation: Quat::IDENTITY,
            pinch_point: Vec3::ZERO,
            pinched: false,
            gripped: false,
        }
    }
}

impl HandInput {
    /// A tracked hand with fingertip, thumb and pinch point all at `at`
    pub fn tracked_at(at: Vec3) -> Self {
        Self {
            tracked: true,
            fingertip: at,
            thumb_tip: at,
            pinch_point: at,
            ..Self::default()
        }
    }

    /// Move every joint by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.fingertip += delta;
        self.thumb_tip += delta;
        self.pinch_point += delta;
    }
}

/// One frame of a far-interaction ray, world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub tracked: bool,
    pub ray: Ray,
    pub orientation: Quat,
    /// Select/pinch button held
    pub pressed: bool,
}
