//! Text measurement

use glam::Vec2;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures text for layout and caret placement. Sizes are in meters,
/// x to the right and y downward.
pub trait TextMeasure: Send + Sync {
    /// Height of one line of text
    fn char_height(&self) -> f32;

    /// Size of the block the text occupies
    fn size(&self, text: &str) -> Vec2;

    /// Offset of the caret from the text's top-left corner, where `caret`
    /// counts characters
    fn caret_offset(&self, text: &str, caret: usize) -> Vec2;

    /// Break text into lines no wider than `max_width`, on whitespace
    /// where possible. A single word wider than the limit stays whole.
    fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                if line.is_empty() {
                    line.push_str(word);
                    continue;
                }
                let candidate = format!("{line} {word}");
                if max_width > 0.0 && self.size(&candidate).x > max_width {
                    lines.push(std::mem::take(&mut line));
                    line.push_str(word);
                } else {
                    line = candidate;
                }
            }
            lines.push(line);
        }
        lines
    }
}

/// Fixed-advance measurement using terminal cell widths, so wide glyphs
/// take two cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_height: f32,
    /// Advance of one cell as a fraction of the height
    pub aspect: f32,
}

impl MonospaceMeasure {
    pub fn new(char_height: f32) -> Self {
        Self {
            char_height,
            aspect: 0.6,
        }
    }

    fn cell_width(&self) -> f32 {
        self.char_height * self.aspect
    }
}

impl TextMeasure for MonospaceMeasure {
    fn char_height(&self) -> f32 {
        self.char_height
    }

    fn size(&self, text: &str) -> Vec2 {
        let mut cells = 0;
        let mut lines = 0;
        for line in text.split('\n') {
            cells = cells.max(line.width());
            lines += 1;
        }
        Vec2::new(
            cells as f32 * self.cell_width(),
            lines as f32 * self.char_height,
        )
    }

    fn caret_offset(&self, text: &str, caret: usize) -> Vec2 {
        let mut line = 0;
        let mut cells = 0;
        for ch in text.chars().take(caret) {
            if ch == '\n' {
                line += 1;
                cells = 0;
            } else {
                cells += ch.width().unwrap_or(0);
            }
        }
        Vec2::new(
            cells as f32 * self.cell_width(),
            line as f32 * self.char_height,
        )
    }
}
