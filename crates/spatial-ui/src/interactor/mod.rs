//! Interactors: the pointing mechanisms that compete for UI elements
//!
//! There is a fixed table of four: a poke/pinch point for each hand and a
//! far-interaction ray for each hand. The table is refreshed once per frame
//! from [`crate::input::FrameInput`], and every widget call resolves focus
//! and activation against it.

mod registry;
mod resolve;

pub use registry::{Interactor, InteractorRegistry};
pub use resolve::BoxHit;

use bitflags::bitflags;

use crate::input::Handed;

/// Number of interactors in the registry
pub const INTERACTOR_COUNT: usize = 4;

/// Index into the interactor table. Hands come first, then their rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractorId(pub usize);

impl InteractorId {
    pub const LEFT_HAND: Self = Self(0);
    pub const RIGHT_HAND: Self = Self(1);
    pub const LEFT_RAY: Self = Self(2);
    pub const RIGHT_RAY: Self = Self(3);

    pub const ALL: [Self; INTERACTOR_COUNT] = [
        Self::LEFT_HAND,
        Self::RIGHT_HAND,
        Self::LEFT_RAY,
        Self::RIGHT_RAY,
    ];

    pub fn hand(handed: Handed) -> Self {
        Self(handed.index())
    }

    pub fn ray(handed: Handed) -> Self {
        Self(2 + handed.index())
    }

    /// The hand this interactor belongs to
    pub fn handed(self) -> Handed {
        if self.0 % 2 == 0 {
            Handed::Left
        } else {
            Handed::Right
        }
    }

    pub fn is_hand(self) -> bool {
        self.0 < 2
    }
}

/// How an interactor hit-tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractorKind {
    /// A fingertip sphere swept between last frame and this one
    Point,
    /// A long segment cast from a hand
    Ray,
}

bitflags! {
    /// Gestures an interactor can perform
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InteractorEvents: u8 {
        const POKE  = 1 << 1;
        const GRIP  = 1 << 2;
        const PINCH = 1 << 3;
    }
}
