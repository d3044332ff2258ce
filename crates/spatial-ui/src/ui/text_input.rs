//! Single field text entry fed from the queued text events

use glam::{Vec2, Vec3};
use tracing::debug;

use super::draw::TEXT_LIFT;
use super::interaction::BoxTest;
use super::Ui;
use crate::backend::{UiSound, UiVisual};
use crate::id::IdHash;
use crate::input::{TextContext, TextEvent};
use crate::interactor::InteractorKind;
use crate::spatial::Bounds;
use crate::theme::UiColor;

/// Duration of the highlight flash when a field takes focus
const FLASH_DURATION: f32 = 0.2;

/// The field that owns the keyboard, and its caret. Caret positions count
/// characters, not bytes; `caret_end` is the other end of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct TextEntry {
    pub target: IdHash,
    pub caret: usize,
    pub caret_end: usize,
    /// When the caret last moved, so it shows solid while typing
    pub blink: f32,
}

impl TextEntry {
    fn selection(&self) -> Option<(usize, usize)> {
        (self.caret != self.caret_end).then(|| (self.caret.min(self.caret_end), self.caret.max(self.caret_end)))
    }

    /// Remove the selected characters, leaving the caret where they were
    fn delete_selection(&mut self, text: &mut String) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        text.replace_range(byte_index(text, start)..byte_index(text, end), "");
        self.caret = start;
        self.caret_end = start;
        true
    }

    fn insert(&mut self, text: &mut String, c: char) {
        self.delete_selection(text);
        text.insert(byte_index(text, self.caret), c);
        self.caret += 1;
        self.caret_end = self.caret;
    }

    /// Returns whether anything was removed
    fn backspace(&mut self, text: &mut String) -> bool {
        if self.delete_selection(text) {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        let at = byte_index(text, self.caret - 1);
        text.remove(at);
        self.caret -= 1;
        self.caret_end = self.caret;
        true
    }

    /// Returns whether anything was removed
    fn delete(&mut self, text: &mut String) -> bool {
        if self.delete_selection(text) {
            return true;
        }
        if self.caret >= text.chars().count() {
            return false;
        }
        let at = byte_index(text, self.caret);
        text.remove(at);
        true
    }

    /// Without `extend`, a selection collapses onto the caret and the
    /// caret only moves when there was nothing selected
    fn left(&mut self, extend: bool) {
        if extend || self.selection().is_none() {
            self.caret = self.caret.saturating_sub(1);
        }
        if !extend {
            self.caret_end = self.caret;
        }
    }

    fn right(&mut self, extend: bool, len: usize) {
        if extend || self.selection().is_none() {
            self.caret = (self.caret + 1).min(len);
        }
        if !extend {
            self.caret_end = self.caret;
        }
    }
}

/// Byte offset of the `chars`-th character, or the end of the string
fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(at, _)| at)
}

impl Ui {
    /// Is any text input holding the keyboard?
    pub fn has_keyboard_focus(&self) -> bool {
        self.text_entry.target.is_some()
    }

    /// An editable text field. Touching it (or pinching it with a ray)
    /// takes the keyboard; queued text events then edit `value`. Returns
    /// true on any frame that changed the text, and on the frame Enter
    /// commits it.
    pub fn input(&mut self, label: &str, value: &mut String, size: Vec2, context: TextContext) -> bool {
        let id = self.ids.stack_hash(label);
        let (top_left, size) = self.layout.reserve(size, false);
        let depth = self.settings.depth;
        let bounds = Bounds::from_top_left(top_left, Vec3::new(size.x, size.y, depth));

        let hit = self.box_1h(id, bounds, bounds, BoxTest::Poke);
        let wants_focus = hit.interactor.is_some_and(|i| {
            let actor = self.interactors.get(i);
            match actor.kind {
                InteractorKind::Point => hit.focus.is_active(),
                InteractorKind::Ray => actor.pinch_state.is_just_active(),
            }
        });
        let state = self.interactors.set_active(hit.interactor, id, wants_focus);

        if state.is_just_active() {
            if let Some(i) = hit.interactor {
                let at = self.interactors.get(i).finger_world;
                self.play_sound(UiSound::Interact, at);
            }
            debug!(label, "Text input took the keyboard");
            self.request_keyboard(true, context);
            let count = value.chars().count();
            self.text_entry = TextEntry {
                target: id,
                caret: count,
                caret_end: count,
                blink: self.input.time,
            };
            self.anim_start(id);
        }

        if self.text_entry.target == id && self.interactors.keyboard_focus_lost(id) {
            debug!(label, "Text input lost the keyboard");
            self.text_entry.target = IdHash::NONE;
            self.request_keyboard(false, context);
        }

        let mut result = false;
        if self.text_entry.target == id {
            result = self.consume_text(value, context);
        }

        self.draw_input(id, value, top_left, size);
        result
    }

    /// Apply queued text events to the focused field. Returns true when
    /// the text changed or Enter committed it.
    fn consume_text(&mut self, value: &mut String, context: TextContext) -> bool {
        // Keep the caret index valid if the caller replaced the text
        let len = value.chars().count();
        self.text_entry.caret = self.text_entry.caret.min(len);
        self.text_entry.caret_end = self.text_entry.caret_end.min(len);

        let mut changed = false;
        while let Some(event) = self.text_queue.pop_front() {
            let entry = &mut self.text_entry;
            match event {
                TextEvent::Backspace => changed |= entry.backspace(value),
                TextEvent::Delete => changed |= entry.delete(value),
                TextEvent::LineFeed => {
                    entry.insert(value, '\n');
                    changed = true;
                }
                TextEvent::Char(c) => {
                    entry.insert(value, c);
                    changed = true;
                }
                TextEvent::Left { extend } => {
                    entry.left(extend);
                    entry.blink = self.input.time;
                }
                TextEvent::Right { extend } => {
                    entry.right(extend, value.chars().count());
                    entry.blink = self.input.time;
                }
                TextEvent::Enter => {
                    entry.target = IdHash::NONE;
                    self.request_keyboard(false, context);
                    return true;
                }
                TextEvent::Escape => {
                    entry.target = IdHash::NONE;
                    self.request_keyboard(false, context);
                    return changed;
                }
            }
        }
        changed
    }

    fn draw_input(&mut self, id: IdHash, value: &str, top_left: Vec3, size: Vec2) {
        let depth = self.settings.depth / 2.0;
        let padding = self.settings.padding;
        let focused = self.text_entry.target == id;

        let blend = if self.anim_has(id, FLASH_DURATION) {
            let t = self.anim_elapsed(id, FLASH_DURATION);
            2.0 - t
        } else if focused {
            1.5
        } else {
            1.0
        };
        let color = self.element_color(UiColor::Common, blend);
        self.draw_element(UiVisual::Input, top_left, Vec3::new(size.x, size.y, depth), color);

        let text_start = top_left - Vec3::new(padding, padding, depth + TEXT_LIFT);
        self.draw_text(value, text_start, size - Vec2::splat(padding * 2.0));
        if !focused {
            return;
        }

        let line = self.char_height();
        let entry = self.text_entry;
        if let Some((start, end)) = entry.selection() {
            let from = self.caret_offset(value, start);
            let to = self.caret_offset(value, end);
            let color = self.element_color(UiColor::Complement, 1.0);
            self.draw_element(
                UiVisual::Selection,
                text_start - Vec3::new(from.x, from.y, -TEXT_LIFT / 2.0),
                Vec3::new((to.x - from.x).max(0.0), line, TEXT_LIFT / 2.0),
                color,
            );
        }

        // Solid for half a second after typing, then blinking
        if ((self.input.time - entry.blink) * 2.0) as i32 % 2 == 0 {
            let at = self.caret_offset(value, entry.caret);
            let color = self.element_color(UiColor::Text, 1.0);
            self.draw_element(
                UiVisual::Caret,
                text_start - Vec3::new(at.x, at.y, 0.0),
                Vec3::new(line * 0.1, line, TEXT_LIFT),
                color,
            );
        }
    }
}
