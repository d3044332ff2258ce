//! Spatial primitives for hit testing and surface placement
//!
//! Surfaces use a right-handed coordinate system where the viewer sits on
//! the local -Z side of a UI surface:
//! - X: decreases left to right across a surface
//! - Y: Up (+) / Down (-)
//! - Z: the pressable face points toward -Z
//!
//! Vector math is `glam`; this module adds the few shapes the interaction
//! engine needs on top of it.

mod bounds;
mod hierarchy;
mod pose;

pub use bounds::Bounds;
pub use hierarchy::Hierarchy;
pub(crate) use hierarchy::rotation_of;
pub use pose::{look_at, look_at_up, Pose, Ray};
