//! Audio feedback

use glam::Vec3;

/// Feedback sounds the UI plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSound {
    /// Button pressed, field focused
    Interact,
    /// Button released
    Uninteract,
    /// Handle picked up
    Grab,
    /// Handle let go
    Release,
}

/// Audio backend trait for spatial UI
pub trait AudioBackend: Send + Sync {
    /// Play a one-shot sound at a world position
    fn play(&mut self, sound: UiSound, at: Vec3);
}

/// Null audio backend (no-op)
pub struct NullAudioBackend;

impl AudioBackend for NullAudioBackend {
    fn play(&mut self, _sound: UiSound, _at: Vec3) {}
}

impl AudioBackend for Vec<(UiSound, Vec3)> {
    fn play(&mut self, sound: UiSound, at: Vec3) {
        self.push((sound, at));
    }
}
