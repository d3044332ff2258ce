//! Nested transform stack for surfaces

use glam::{Mat4, Quat, Vec3};
use tracing::warn;

use super::Ray;

#[derive(Debug, Clone, Copy)]
struct Level {
    to_world: Mat4,
    to_local: Mat4,
}

/// Stack of local-to-world transforms. Every push composes with the
/// current top so `to_world`/`to_local` always describe the innermost
/// surface.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    levels: Vec<Level>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub fn new() -> Self {
        Self {
            levels: vec![Level {
                to_world: Mat4::IDENTITY,
                to_local: Mat4::IDENTITY,
            }],
        }
    }

    /// Push a transform expressed relative to the current top
    pub fn push(&mut self, transform: Mat4) {
        let to_world = self.to_world() * transform;
        self.levels.push(Level {
            to_world,
            to_local: to_world.inverse(),
        });
    }

    pub fn pop(&mut self) {
        if self.levels.len() <= 1 {
            warn!("Tried to pop the root transform! Do you have a push/pop mismatch?");
            return;
        }
        self.levels.pop();
    }

    /// Number of pushed transforms, not counting the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn reset(&mut self) {
        self.levels.truncate(1);
    }

    pub fn to_world(&self) -> Mat4 {
        self.levels.last().map_or(Mat4::IDENTITY, |l| l.to_world)
    }

    pub fn to_local(&self) -> Mat4 {
        self.levels.last().map_or(Mat4::IDENTITY, |l| l.to_local)
    }

    pub fn to_local_point(&self, world: Vec3) -> Vec3 {
        self.to_local().transform_point3(world)
    }

    pub fn to_world_point(&self, local: Vec3) -> Vec3 {
        self.to_world().transform_point3(local)
    }

    pub fn to_local_direction(&self, world: Vec3) -> Vec3 {
        self.to_local().transform_vector3(world)
    }

    pub fn to_local_ray(&self, world: &Ray) -> Ray {
        Ray::new(
            self.to_local_point(world.origin),
            self.to_local_direction(world.direction),
        )
    }

    pub fn to_local_rotation(&self, world: Quat) -> Quat {
        rotation_of(&self.to_local()) * world
    }

    pub fn to_world_rotation(&self, local: Quat) -> Quat {
        rotation_of(&self.to_world()) * local
    }
}

/// Rotation part of a rigid transform
pub(crate) fn rotation_of(m: &Mat4) -> Quat {
    let (_, rotation, _) = m.to_scale_rotation_translation();
    rotation
}
