//! Windows: a draggable surface with a header, a body, and a layout that
//! sizes itself to its content

use glam::{Vec2, Vec3};
use tracing::{trace, warn};

use super::draw::TEXT_LIFT;
use super::handle::{MoveType, UiGesture};
use super::Ui;
use crate::backend::UiVisual;
use crate::layout::{FrameMeasure, WindowMeasure};
use crate::spatial::{Bounds, Pose};
use crate::theme::UiColor;

/// Which parts of a window are drawn and grabbable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowStyle {
    /// Header and body
    #[default]
    Normal,
    Head,
    Body,
    /// Neither; content floats on its own
    Empty,
}

impl WindowStyle {
    pub fn has_head(self) -> bool {
        matches!(self, WindowStyle::Normal | WindowStyle::Head)
    }

    pub fn has_body(self) -> bool {
        matches!(self, WindowStyle::Normal | WindowStyle::Body)
    }
}

/// What a window remembers between frames
#[derive(Debug, Clone)]
pub(super) struct WindowState {
    pub label: String,
    pub style: WindowStyle,
    /// Size measured last frame; auto axes of the layout use it
    pub prev_size: Vec2,
    /// Size being measured this frame
    pub curr_size: Vec2,
    /// Size the caller asked for, 0 on auto axes
    pub layout_size: Vec2,
    pub last_seen: u64,
}

impl Ui {
    /// Open a window at `pose`, moving the pose when its header or body is
    /// grabbed. A 0 axis in `size` fits the content. Close it with
    /// [`Ui::window_end`].
    pub fn window_begin(&mut self, label: &str, pose: &mut Pose, size: Vec2, style: WindowStyle, move_type: MoveType) {
        let id = self.ids.push_id(label);
        let frame = self.frame;
        let state = self.windows.entry(id).or_insert_with(|| {
            trace!(label, "New window");
            WindowState {
                label: label.to_string(),
                style,
                prev_size: size,
                curr_size: size,
                layout_size: size,
                last_seen: frame,
            }
        });
        state.prev_size = state.curr_size;
        state.curr_size = size;
        state.layout_size = size;
        state.style = style;
        state.last_seen = frame;
        let prev = state.prev_size;

        let line = self.line_height();
        let depth = self.settings.depth;
        let mut center = Vec3::new(0.0, 0.0, depth / 2.0);
        let mut dimensions = Vec3::new(prev.x, 0.0, depth * 2.0);
        if style.has_head() {
            center.y = line / 2.0;
            dimensions.y = line;
        }
        if style.has_body() {
            center.y -= prev.y / 2.0;
            dimensions.y += prev.y;
        }
        if !style.has_head() && !style.has_body() {
            dimensions = Vec3::ZERO;
        }

        self.handle_begin_id(
            id,
            pose,
            Bounds::new(center, dimensions),
            false,
            move_type,
            UiGesture::PINCH,
        );
        self.layout.push_window(
            Vec3::new(prev.x / 2.0, 0.0, 0.0),
            size,
            true,
            WindowMeasure {
                window: id,
                prev_size: prev,
                layout_size: size,
            },
        );
        self.window_stack.push(id);
    }

    /// Close the innermost window and draw its backplates at the measured
    /// size
    pub fn window_end(&mut self) {
        let Some(id) = self.window_stack.pop() else {
            warn!("Tried to end a window that wasn't begun! Do you have a begin/end mismatch?");
            return;
        };
        self.layout_pop();

        if let Some(state) = self.windows.get(&id) {
            let (size, style, label) = (state.curr_size, state.style, state.label.clone());
            let line = self.line_height();
            let plate = self.settings.depth * 0.1;
            let padding = self.settings.padding;

            if style.has_head() {
                let color = self.element_color(UiColor::Primary, 1.0);
                let top_left = Vec3::new(size.x / 2.0, line, 0.0);
                self.draw_element(UiVisual::WindowHead, top_left, Vec3::new(size.x, line, plate), color);
                self.draw_text(
                    &label,
                    top_left - Vec3::new(padding, padding, plate + TEXT_LIFT),
                    Vec2::new(size.x - padding * 2.0, line - padding * 2.0),
                );
            }
            if style.has_body() {
                let color = self.element_color(UiColor::Background, 1.0);
                self.draw_element(
                    UiVisual::WindowBody,
                    Vec3::new(size.x / 2.0, 0.0, 0.0),
                    Vec3::new(size.x, size.y, plate),
                    color,
                );
            }
        }

        self.handle_end();
        self.ids.pop_id();
    }

    /// Fold a popped layout frame's content size into its window. Fixed
    /// axes come through as zero and keep the requested size.
    pub(super) fn apply_window_measure(&mut self, measure: FrameMeasure) {
        let Some(state) = self.windows.get_mut(&measure.window) else {
            return;
        };
        if measure.size.x != 0.0 {
            state.curr_size.x = measure.size.x;
        }
        if measure.size.y != 0.0 {
            state.curr_size.y = measure.size.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, NullAudioBackend, NullKeyboardBackend, NullRenderBackend};
    use crate::input::{FrameInput, HandInput};

    fn end(ui: &mut Ui) {
        ui.end_frame(&mut NullRenderBackend, &mut NullAudioBackend, &mut NullKeyboardBackend);
    }

    fn element_width(ui: &Ui, wanted: UiVisual) -> Option<f32> {
        ui.draw_commands().iter().find_map(|d| match d {
            DrawCommand::Element { visual, transform, .. } if *visual == wanted => Some(transform.x_axis.length()),
            _ => None,
        })
    }

    #[test]
    fn test_auto_window_fits_content() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        ui.begin_frame(&FrameInput::default());
        ui.window_begin("Win", &mut pose, Vec2::ZERO, WindowStyle::Normal, MoveType::Exact);
        ui.label("hello");
        ui.window_end();

        let settings = *ui.settings();
        let expected = ui.text_size("hello").x + settings.padding * 2.0 + settings.margin * 2.0;
        let id = ui.stack_hash("Win");
        let size = ui.windows[&id].curr_size;
        assert!((size.x - expected).abs() < 1e-5);
        assert!(size.y > 0.0);
        let drawn = element_width(&ui, UiVisual::WindowBody).unwrap_or_default();
        assert!((drawn - expected).abs() < 1e-5);
        end(&mut ui);
    }

    #[test]
    fn test_fixed_width_is_kept() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        ui.begin_frame(&FrameInput::default());
        ui.window_begin("Win", &mut pose, Vec2::new(0.3, 0.0), WindowStyle::Normal, MoveType::Exact);
        ui.label("hi");
        ui.window_end();
        let id = ui.stack_hash("Win");
        assert!((ui.windows[&id].curr_size.x - 0.3).abs() < 1e-6);
        end(&mut ui);
    }

    #[test]
    fn test_unseen_windows_are_forgotten() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        ui.begin_frame(&FrameInput::default());
        ui.window_begin("Win", &mut pose, Vec2::ZERO, WindowStyle::Body, MoveType::Exact);
        ui.window_end();
        end(&mut ui);

        ui.begin_frame(&FrameInput::default());
        end(&mut ui);
        assert_eq!(ui.windows.len(), 1);

        ui.begin_frame(&FrameInput::default());
        end(&mut ui);
        assert!(ui.windows.is_empty());
    }

    #[test]
    fn test_style_controls_backplates() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        ui.begin_frame(&FrameInput::default());
        ui.window_begin("Win", &mut pose, Vec2::new(0.2, 0.1), WindowStyle::Head, MoveType::Exact);
        ui.window_end();
        assert!(element_width(&ui, UiVisual::WindowHead).is_some());
        assert!(element_width(&ui, UiVisual::WindowBody).is_none());
        end(&mut ui);
    }

    #[test]
    fn test_unbalanced_window_closed_at_end_frame() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        ui.begin_frame(&FrameInput::default());
        ui.window_begin("Win", &mut pose, Vec2::ZERO, WindowStyle::Normal, MoveType::Exact);
        end(&mut ui);
        assert_eq!(ui.interactors().layer_depth(), 0);
        ui.window_end();
    }

    #[test]
    fn test_header_drags_window() {
        let mut ui = Ui::default();
        let mut pose = Pose::IDENTITY;
        let size = Vec2::new(0.2, 0.1);
        let header = Vec3::new(0.0, ui.line_height() / 2.0, 0.005);

        let frame = |ui: &mut Ui, pose: &mut Pose, at: Vec3, pinched: bool| {
            let mut input = FrameInput::default();
            input.hands[1] = HandInput {
                pinched,
                ..HandInput::tracked_at(at)
            };
            ui.begin_frame(&input);
            ui.window_begin("Win", pose, size, WindowStyle::Normal, MoveType::Exact);
            ui.window_end();
            end(ui);
        };

        frame(&mut ui, &mut pose, header, false);
        frame(&mut ui, &mut pose, header, true);
        assert!(pose.position.length() < 1e-6);
        frame(&mut ui, &mut pose, header + Vec3::new(0.1, 0.0, 0.0), true);
        assert!((pose.position.x - 0.06).abs() < 1e-5);
    }
}
