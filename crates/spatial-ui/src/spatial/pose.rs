//! Poses, rays and look-at orientations

use glam::{Mat3, Mat4, Quat, Vec3};

/// A rigid transform: position plus orientation, no scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at a position with identity orientation
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Pose at `position` whose forward (-Z) axis points at `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self::new(position, look_at(position, target))
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// The direction this pose faces (-Z)
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Transform a point from this pose's local space into its parent space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.orientation * point
    }
}

/// A ray with an origin and a (not necessarily unit) direction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray, `t` measured in multiples of `direction`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Orientation whose forward (-Z) axis points from `from` toward `at`,
/// keeping world up as close to +Y as possible.
pub fn look_at(from: Vec3, at: Vec3) -> Quat {
    look_at_up(from, at, Vec3::Y)
}

/// Orientation whose forward (-Z) axis points from `from` toward `at`, with
/// `up` as the roll reference. Degenerate inputs give identity.
pub fn look_at_up(from: Vec3, at: Vec3, up: Vec3) -> Quat {
    let z = (from - at).normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let x = up.cross(z).normalize_or_zero();
    if x == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
