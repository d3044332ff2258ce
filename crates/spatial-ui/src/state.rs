//! Two-frame activation state

use bitflags::bitflags;

bitflags! {
    /// State of something that can be on or off, plus whether it changed
    /// this frame. Used for focus, activation, pinch and tracking alike.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonState: u8 {
        /// Currently on
        const ACTIVE        = 1 << 0;
        /// Turned off this frame
        const JUST_INACTIVE = 1 << 1;
        /// Turned on this frame
        const JUST_ACTIVE   = 1 << 2;
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::INACTIVE
    }
}

impl ButtonState {
    pub const INACTIVE: Self = Self::empty();

    /// Build a state from last frame's and this frame's on/off values
    pub fn from_transition(was: bool, is: bool) -> Self {
        let mut state = Self::INACTIVE;
        if is {
            state |= Self::ACTIVE;
        }
        if is && !was {
            state |= Self::JUST_ACTIVE;
        }
        if !is && was {
            state |= Self::JUST_INACTIVE;
        }
        state
    }

    pub fn is_active(self) -> bool {
        self.contains(Self::ACTIVE)
    }

    pub fn is_just_active(self) -> bool {
        self.contains(Self::JUST_ACTIVE)
    }

    pub fn is_just_inactive(self) -> bool {
        self.contains(Self::JUST_INACTIVE)
    }

    /// Whether the state flipped this frame
    pub fn changed(self) -> bool {
        self.intersects(Self::JUST_ACTIVE | Self::JUST_INACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert_eq!(ButtonState::from_transition(false, false), ButtonState::INACTIVE);
        assert_eq!(
            ButtonState::from_transition(false, true),
            ButtonState::ACTIVE | ButtonState::JUST_ACTIVE
        );
        assert_eq!(ButtonState::from_transition(true, true), ButtonState::ACTIVE);
        assert_eq!(ButtonState::from_transition(true, false), ButtonState::JUST_INACTIVE);
    }

    #[test]
    fn test_changed() {
        assert!(ButtonState::from_transition(true, false).changed());
        assert!(!ButtonState::from_transition(true, true).changed());
        assert!(!ButtonState::default().is_active());
    }
}
