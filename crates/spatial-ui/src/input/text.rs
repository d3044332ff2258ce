//! Text entry events

/// Kind of text a field expects, forwarded to the keyboard so it can pick
/// a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextContext {
    #[default]
    Text,
    Number,
    Uri,
}

/// One queued text edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    Char(char),
    Backspace,
    Delete,
    /// Commit the field
    Enter,
    /// Shift+Enter, inserts a newline
    LineFeed,
    Escape,
    /// Caret left; `extend` grows the selection instead of collapsing it
    Left { extend: bool },
    Right { extend: bool },
}

impl TextEvent {
    /// Map a raw character/control code. Zero means "queue empty".
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => None,
            0x08 => Some(TextEvent::Backspace),
            0x7F => Some(TextEvent::Delete),
            0x0D => Some(TextEvent::Enter),
            0x0A => Some(TextEvent::LineFeed),
            0x1B => Some(TextEvent::Escape),
            _ => char::from_u32(code).map(TextEvent::Char),
        }
    }
}

impl From<char> for TextEvent {
    fn from(c: char) -> Self {
        TextEvent::from_code(c as u32).unwrap_or(TextEvent::Char(c))
    }
}
