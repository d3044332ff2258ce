//! Single-slot highlight animation

use crate::id::IdHash;

/// Tracks one short-lived animation keyed by element id. Starting an
/// animation on another element replaces the current one.
#[derive(Debug, Clone, Default)]
pub struct FlashAnimation {
    id: IdHash,
    start_time: f32,
}

impl FlashAnimation {
    /// Start animating `id`, unless it is already the animating element
    pub fn start(&mut self, id: IdHash, time: f32) {
        if self.id != id {
            self.id = id;
            self.start_time = time;
        }
    }

    /// Is `id` still within `duration` seconds of its start? An expired
    /// animation is cleared.
    pub fn has(&mut self, id: IdHash, duration: f32, time: f32) -> bool {
        if id.is_some() && self.id == id {
            if time - self.start_time < duration {
                return true;
            }
            self.id = IdHash::NONE;
        }
        false
    }

    /// Fraction of `duration` elapsed for `id`, clamped to 0..=1. Zero for
    /// any other element.
    pub fn elapsed(&self, id: IdHash, duration: f32, time: f32) -> f32 {
        if id.is_some() && self.id == id && duration > 0.0 {
            ((time - self.start_time) / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
