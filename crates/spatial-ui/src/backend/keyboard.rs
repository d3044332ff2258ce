//! Virtual or system keyboard control

use crate::input::TextContext;

pub trait KeyboardBackend: Send + Sync {
    /// Show or hide the keyboard, with the kind of text expected
    fn set_visible(&mut self, visible: bool, context: TextContext);
}

/// Null keyboard backend (no-op)
pub struct NullKeyboardBackend;

impl KeyboardBackend for NullKeyboardBackend {
    fn set_visible(&mut self, _visible: bool, _context: TextContext) {}
}

impl KeyboardBackend for Vec<(bool, TextContext)> {
    fn set_visible(&mut self, visible: bool, context: TextContext) {
        self.push((visible, context));
    }
}
