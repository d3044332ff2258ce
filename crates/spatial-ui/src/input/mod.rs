//! Per-frame input snapshot consumed by the interaction engine
//!
//! The host samples its hand tracking, pointer and head sources once per
//! frame and hands the result to [`crate::Ui::begin_frame`]:
//! - Hands: fingertip, thumb, pinch point, palm orientation
//! - Pointers: one ray per hand for far interaction
//! - Head: viewer pose for facing and popup placement
//! - Text: queued separately with [`crate::Ui::queue_text`]

mod hand;
mod text;

pub use hand::{HandInput, Handed, PointerInput};
pub use text::{TextContext, TextEvent};

use crate::spatial::Pose;

/// Everything the interaction engine needs from the outside world for one
/// frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since an arbitrary start, monotonic
    pub time: f32,
    /// Viewer head pose in world space
    pub head: Pose,
    /// Indexed by [`Handed`]
    pub hands: [HandInput; 2],
    /// Hand rays, indexed by [`Handed`]
    pub pointers: [PointerInput; 2],
}

impl FrameInput {
    pub fn hand(&self, handed: Handed) -> &HandInput {
        &self.hands[handed.index()]
    }

    pub fn hand_mut(&mut self, handed: Handed) -> &mut HandInput {
        &mut self.hands[handed.index()]
    }

    pub fn pointer(&self, handed: Handed) -> &PointerInput {
        &self.pointers[handed.index()]
    }

    pub fn pointer_mut(&mut self, handed: Handed) -> &mut PointerInput {
        &mut self.pointers[handed.index()]
    }
}
