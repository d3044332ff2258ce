//! Demo implementations of the UI backends
//!
//! - `TerminalView`: projects draw commands onto a character grid
//! - `LogAudio`: logs feedback sounds through tracing
//! - `TerminalKeyboard`: tracks whether the host should route keys to text

use std::collections::BTreeMap;
use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use glam::{Mat4, Vec3};
use spatial_ui::{
    AudioBackend, DrawCommand, HandInput, Handed, KeyboardBackend, RenderBackend, TextContext,
    UiSound, UiVisual,
};
use tracing::{debug, info};

const COLS: usize = 96;
const ROWS: usize = 34;
/// Meters per terminal cell
const CELL_WIDTH: f32 = 0.006;
const CELL_HEIGHT: f32 = 0.012;

/// Collects a frame's draw commands and paints them as characters, looking
/// at the scene from the viewer's side
#[derive(Default)]
pub struct TerminalView {
    commands: Vec<DrawCommand>,
}

impl RenderBackend for TerminalView {
    fn submit(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

fn glyph(visual: UiVisual) -> (char, bool) {
    // (character, is a backplate drawn under everything else)
    match visual {
        UiVisual::WindowBody => ('.', true),
        UiVisual::WindowHead => ('=', true),
        UiVisual::Panel => (':', true),
        UiVisual::Button => ('#', false),
        UiVisual::ButtonRound => ('o', false),
        UiVisual::Toggle => ('%', false),
        UiVisual::Input => ('_', false),
        UiVisual::Handle => ('+', false),
        UiVisual::Separator => ('-', false),
        UiVisual::SliderLine => ('-', false),
        UiVisual::SliderPush | UiVisual::SliderPinch => ('@', false),
        UiVisual::Caret => ('|', false),
        UiVisual::Selection => ('~', false),
    }
}

/// Grid cell for a world point. The viewer looks down +Z, so world +X is
/// on their left.
fn cell(at: Vec3) -> Option<(usize, usize)> {
    let col = COLS as f32 / 2.0 - at.x / CELL_WIDTH;
    let row = ROWS as f32 / 2.0 - at.y / CELL_HEIGHT;
    if col < 0.0 || row < 0.0 || col >= COLS as f32 || row >= ROWS as f32 {
        return None;
    }
    Some((col as usize, row as usize))
}

struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new() -> Self {
        Self {
            cells: vec![vec![' '; COLS]; ROWS],
        }
    }

    fn put(&mut self, at: Vec3, c: char) {
        if let Some((col, row)) = cell(at) {
            self.cells[row][col] = c;
        }
    }

    fn fill(&mut self, transform: &Mat4, c: char) {
        let center = transform.w_axis.truncate();
        let half_x = transform.x_axis.truncate() / 2.0;
        let half_y = transform.y_axis.truncate() / 2.0;
        let (Some(a), Some(b)) = (cell(center + half_x + half_y), cell(center - half_x - half_y)) else {
            self.put(center, c);
            return;
        };
        for row in a.1.min(b.1)..=a.1.max(b.1) {
            for col in a.0.min(b.0)..=a.0.max(b.0) {
                self.cells[row][col] = c;
            }
        }
    }

    fn text(&mut self, at: Vec3, text: &str) {
        for (line_index, line) in text.lines().enumerate() {
            let Some((col, row)) = cell(at) else { return };
            let row = row + line_index;
            if row >= ROWS {
                return;
            }
            for (i, c) in line.chars().enumerate() {
                if col + i < COLS {
                    self.cells[row][col + i] = c;
                }
            }
        }
    }

    fn line(&mut self, from: Vec3, to: Vec3) {
        for step in 0..=8 {
            self.put(from.lerp(to, step as f32 / 8.0), '*');
        }
    }
}

impl TerminalView {
    /// Paint the collected commands plus both hands and a status line,
    /// then forget the commands
    pub fn present(
        &mut self,
        out: &mut impl Write,
        hands: [&HandInput; 2],
        status: &str,
    ) -> std::io::Result<()> {
        let mut grid = Grid::new();
        for command in &self.commands {
            if let DrawCommand::Element { visual, transform, .. } = command {
                let (c, backplate) = glyph(*visual);
                if backplate {
                    grid.fill(transform, c);
                }
            }
        }
        for command in self.commands.drain(..) {
            match command {
                DrawCommand::Element { visual, transform, .. } => {
                    let (c, backplate) = glyph(visual);
                    if !backplate {
                        grid.fill(&transform, c);
                    }
                }
                DrawCommand::Image { transform, .. } => grid.fill(&transform, '*'),
                DrawCommand::Text { text, transform, .. } => grid.text(transform.w_axis.truncate(), &text),
                DrawCommand::Line { from, to, .. } => grid.line(from, to),
                DrawCommand::DebugBox { .. } => {}
            }
        }
        for (hand, input) in Handed::ALL.into_iter().zip(hands) {
            if !input.tracked {
                continue;
            }
            let c = match (hand, input.pinched) {
                (Handed::Left, false) => 'l',
                (Handed::Left, true) => 'L',
                (Handed::Right, false) => 'r',
                (Handed::Right, true) => 'R',
            };
            grid.put(input.fingertip, c);
        }

        queue!(out, Clear(ClearType::All))?;
        for (row, cells) in grid.cells.iter().enumerate() {
            let line: String = cells.iter().collect();
            queue!(out, MoveTo(0, row as u16), Print(line))?;
        }
        queue!(out, MoveTo(0, ROWS as u16), Print(status))?;
        out.flush()
    }
}

/// Counts draw commands per kind and logs a summary each frame
#[derive(Default)]
pub struct LogRenderer {
    elements: BTreeMap<String, usize>,
    texts: Vec<String>,
}

impl LogRenderer {
    pub fn flush(&mut self, frame: u64) {
        debug!(frame, elements = ?self.elements, texts = ?self.texts, "Frame drawn");
        self.elements.clear();
        self.texts.clear();
    }
}

impl RenderBackend for LogRenderer {
    fn submit(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Element { visual, .. } => {
                *self.elements.entry(format!("{:?}", visual)).or_default() += 1;
            }
            DrawCommand::Image { image, .. } => {
                *self.elements.entry(format!("Image{}", image.id)).or_default() += 1;
            }
            DrawCommand::Text { text, .. } => self.texts.push(text.clone()),
            DrawCommand::Line { .. } | DrawCommand::DebugBox { .. } => {}
        }
    }
}

/// Logs feedback sounds and remembers the latest one for the status line
#[derive(Default)]
pub struct LogAudio {
    pub last: Option<UiSound>,
}

impl AudioBackend for LogAudio {
    fn play(&mut self, sound: UiSound, at: Vec3) {
        info!(?sound, x = at.x, y = at.y, z = at.z, "Sound");
        self.last = Some(sound);
    }
}

/// Stands in for a virtual keyboard: while visible, the host sends key
/// presses to the focused text field
#[derive(Default)]
pub struct TerminalKeyboard {
    pub visible: bool,
    pub context: TextContext,
}

impl KeyboardBackend for TerminalKeyboard {
    fn set_visible(&mut self, visible: bool, context: TextContext) {
        if visible != self.visible {
            info!(visible, ?context, "Keyboard toggled");
        }
        self.visible = visible;
        self.context = context;
    }
}
