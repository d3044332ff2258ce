//! Render submission

use glam::{Mat4, Vec2, Vec3};

use crate::theme::Color;

/// Which mesh an element is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiVisual {
    Button,
    ButtonRound,
    Toggle,
    Input,
    Handle,
    WindowHead,
    WindowBody,
    Panel,
    Separator,
    SliderLine,
    SliderPush,
    SliderPinch,
    Caret,
    Selection,
}

/// A host-owned image the UI can place on buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiImage {
    /// Host handle, passed back untouched in [`DrawCommand::Image`]
    pub id: u32,
    /// Width over height
    pub aspect: f32,
}

impl UiImage {
    pub fn new(id: u32, aspect: f32) -> Self {
        Self { id, aspect }
    }
}

/// One thing to draw, already in world space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A unit mesh scaled, rotated and placed by `transform`
    Element {
        visual: UiVisual,
        transform: Mat4,
        color: Color,
    },
    /// Text whose top-left corner sits at the origin of `transform`
    Text {
        text: String,
        transform: Mat4,
        bounds: Vec2,
        color: Color,
    },
    /// A unit quad centered on the origin of `transform`, showing `image`
    Image {
        image: UiImage,
        transform: Mat4,
        color: Color,
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: Color,
        thickness: f32,
    },
    /// Wireframe of a hit-test volume, only emitted with volumes shown
    DebugBox { transform: Mat4 },
}

impl DrawCommand {
    /// World-space position of the command's origin
    pub fn position(&self) -> Vec3 {
        match self {
            DrawCommand::Element { transform, .. }
            | DrawCommand::Text { transform, .. }
            | DrawCommand::Image { transform, .. }
            | DrawCommand::DebugBox { transform } => transform.w_axis.truncate(),
            DrawCommand::Line { from, .. } => *from,
        }
    }
}

/// Backend rendering trait for spatial UI
pub trait RenderBackend: Send + Sync {
    fn submit(&mut self, command: &DrawCommand);
}

/// Null render backend (no-op)
pub struct NullRenderBackend;

impl RenderBackend for NullRenderBackend {
    fn submit(&mut self, _command: &DrawCommand) {}
}

/// Collects commands, handy for tests and replay
impl RenderBackend for Vec<DrawCommand> {
    fn submit(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}
