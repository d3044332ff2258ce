//! Keyboard-driven hand simulator
//!
//! Maps terminal keys to simulated hand tracking so the interaction engine
//! can be driven without XR hardware.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glam::Vec3;
use spatial_ui::{FrameInput, HandInput, Handed, Pose, Ray, TextEvent};

/// Where the simulated viewer stands, looking toward +Z
pub const HEAD_POSITION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

const HAND_STEP: f32 = 0.01;
const PUSH_STEP: f32 = 0.004;
const THUMB_OFFSET: Vec3 = Vec3::new(0.015, -0.02, 0.0);

/// What a key press meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    None,
    Quit,
    /// Hands or rays changed
    Moved,
    Text(TextEvent),
}

/// Simulates two tracked hands, and optionally their rays, from the keyboard
pub struct HandSimulator {
    hands: [HandInput; 2],
    selected: Handed,
    far: bool,
    pointer_pressed: [bool; 2],
    start: Instant,
}

impl Default for HandSimulator {
    fn default() -> Self {
        Self {
            hands: [home(Handed::Left), home(Handed::Right)],
            selected: Handed::Right,
            far: false,
            pointer_pressed: [false; 2],
            start: Instant::now(),
        }
    }
}

fn home(hand: Handed) -> HandInput {
    // Positive x is the viewer's left
    let x = match hand {
        Handed::Left => 0.15,
        Handed::Right => -0.15,
    };
    let at = Vec3::new(x, -0.12, -0.5);
    HandInput {
        thumb_tip: at + THUMB_OFFSET,
        ..HandInput::tracked_at(at)
    }
}

impl HandSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Handed {
        self.selected
    }

    pub fn hand(&self, hand: Handed) -> &HandInput {
        &self.hands[hand.index()]
    }

    pub fn far(&self) -> bool {
        self.far
    }

    /// Put a hand's fingertip at `at`, keeping the rest of the hand with it
    pub fn place(&mut self, hand: Handed, at: Vec3) {
        let current = self.hands[hand.index()].fingertip;
        self.hands[hand.index()].translate(at - current);
    }

    pub fn set_pinched(&mut self, hand: Handed, pinched: bool) {
        self.hands[hand.index()].pinched = pinched;
    }

    /// Translate a key press. While `typing`, printable keys become text
    /// for the focused field instead of moving hands.
    pub fn process_key(&mut self, key: KeyEvent, typing: bool) -> SimAction {
        if key.kind != KeyEventKind::Press {
            return SimAction::None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return SimAction::Quit;
        }
        if typing {
            if let Some(event) = text_event(key) {
                return SimAction::Text(event);
            }
        }

        let selected = self.selected.index();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return SimAction::Quit,
            KeyCode::Tab => self.selected = self.selected.other(),
            KeyCode::Left => self.hands[selected].translate(Vec3::X * HAND_STEP),
            KeyCode::Right => self.hands[selected].translate(Vec3::NEG_X * HAND_STEP),
            KeyCode::Up => self.hands[selected].translate(Vec3::Y * HAND_STEP),
            KeyCode::Down => self.hands[selected].translate(Vec3::NEG_Y * HAND_STEP),
            KeyCode::Char('w') => self.hands[selected].translate(Vec3::Z * PUSH_STEP),
            KeyCode::Char('s') => self.hands[selected].translate(Vec3::NEG_Z * PUSH_STEP),
            KeyCode::Char(' ') => {
                let hand = &mut self.hands[selected];
                hand.pinched = !hand.pinched;
                self.pointer_pressed[selected] = hand.pinched;
            }
            KeyCode::Char('g') => {
                let hand = &mut self.hands[selected];
                hand.gripped = !hand.gripped;
            }
            KeyCode::Char('t') => {
                let hand = &mut self.hands[selected];
                hand.tracked = !hand.tracked;
            }
            KeyCode::Char('f') => self.far = !self.far,
            KeyCode::Char('r') => *self = Self {
                start: self.start,
                ..Self::default()
            },
            _ => return SimAction::None,
        }
        SimAction::Moved
    }

    /// Sample the simulated devices for one frame
    pub fn frame_input(&self) -> FrameInput {
        let mut input = FrameInput {
            time: self.start.elapsed().as_secs_f32(),
            head: Pose::looking_at(HEAD_POSITION, Vec3::new(0.0, 0.0, 0.0)),
            hands: self.hands,
            ..FrameInput::default()
        };
        if self.far {
            for hand in Handed::ALL {
                let fingertip = self.hands[hand.index()].fingertip;
                let shoulder = HEAD_POSITION + Vec3::new(fingertip.x.signum() * 0.2, -0.3, 0.0);
                let direction = (fingertip - shoulder).normalize_or_zero();
                let pointer = input.pointer_mut(hand);
                pointer.tracked = self.hands[hand.index()].tracked;
                pointer.ray = Ray::new(fingertip, direction);
                pointer.orientation = Pose::looking_at(shoulder, fingertip).orientation;
                pointer.pressed = self.pointer_pressed[hand.index()];
            }
        }
        input
    }
}

fn text_event(key: KeyEvent) -> Option<TextEvent> {
    let extend = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char(c) => Some(TextEvent::Char(c)),
        KeyCode::Backspace => Some(TextEvent::Backspace),
        KeyCode::Delete => Some(TextEvent::Delete),
        KeyCode::Enter if extend => Some(TextEvent::LineFeed),
        KeyCode::Enter => Some(TextEvent::Enter),
        KeyCode::Esc => Some(TextEvent::Escape),
        KeyCode::Left => Some(TextEvent::Left { extend }),
        KeyCode::Right => Some(TextEvent::Right { extend }),
        _ => None,
    }
}
