//! Static text and separators

use glam::{Vec2, Vec3};

use super::Ui;
use crate::backend::UiVisual;
use crate::theme::UiColor;

impl Ui {
    /// A single line of text sized to fit, padded like a button so rows
    /// of labels and buttons line up
    pub fn label(&mut self, text: &str) {
        let size = self.text_size(text);
        let (pos, size) = self.layout.reserve(size, true);
        self.draw_label_at(text, pos, size);
    }

    /// A label in a slot of a given size; zero axes fill the line
    pub fn label_sz(&mut self, text: &str, size: Vec2) {
        let (pos, size) = self.layout.reserve(size, false);
        self.draw_label_at(text, pos, size);
    }

    fn draw_label_at(&mut self, text: &str, top_left: Vec3, size: Vec2) {
        let padding = self.settings.padding;
        self.draw_text(
            text,
            top_left - Vec3::new(padding, padding, 0.0),
            size - Vec2::splat(padding * 2.0),
        );
    }

    /// Paragraph text wrapped to the remaining width. In an auto-width
    /// layout it's laid out on its own lines as written.
    pub fn text(&mut self, text: &str) {
        let width = self.layout.remaining().x;
        let wrapped = self.wrap_text(text, width).join("\n");
        let measured = self.text_size(&wrapped);
        let size = Vec2::new(if width > 0.0 { width } else { measured.x }, measured.y);
        let (pos, size) = self.layout.reserve(size, false);
        self.draw_text(&wrapped, pos, size);
    }

    /// A thin horizontal rule across the remaining width
    pub fn hseparator(&mut self) {
        let height = self.char_height() * 0.4;
        let width = self.layout.remaining().x;
        let (pos, size) = self.layout.reserve(Vec2::new(width, height), false);
        let color = self.element_color(UiColor::Primary, 1.0);
        let depth = self.settings.depth * 0.4;
        self.draw_element(UiVisual::Separator, pos, Vec3::new(size.x, size.y, depth), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DrawCommand;
    use crate::input::FrameInput;

    fn texts(ui: &Ui) -> Vec<String> {
        ui.draw_commands()
            .iter()
            .filter_map(|d| match d {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_label_reserves_padded_text() {
        let mut ui = Ui::default();
        ui.begin_frame(&FrameInput::default());
        ui.label("Status");
        let padding = ui.settings().padding;
        let expected = ui.text_size("Status") + Vec2::splat(padding * 2.0);
        let last = ui.layout_last();
        assert!((last.dimensions.x - expected.x).abs() < 1e-6);
        assert!((last.dimensions.y - expected.y).abs() < 1e-6);
        assert_eq!(texts(&ui), vec!["Status".to_string()]);
    }

    #[test]
    fn test_text_wraps_to_remaining_width() {
        let mut ui = Ui::default();
        ui.begin_frame(&FrameInput::default());
        let width = ui.text_size("alpha beta").x + 0.001;
        ui.layout_push(Vec3::ZERO, Vec2::new(width, 0.0), false);
        ui.text("alpha beta gamma");
        assert_eq!(texts(&ui), vec!["alpha beta\ngamma".to_string()]);
        let last = ui.layout_last();
        assert!((last.dimensions.x - width).abs() < 1e-6);
        ui.layout_pop();
    }

    #[test]
    fn test_separator_spans_width() {
        let mut ui = Ui::default();
        ui.begin_frame(&FrameInput::default());
        ui.layout_push(Vec3::ZERO, Vec2::new(0.25, 0.0), false);
        ui.hseparator();
        assert!((ui.layout_last().dimensions.x - 0.25).abs() < 1e-6);
        assert!(matches!(
            ui.draw_commands()[0],
            DrawCommand::Element {
                visual: UiVisual::Separator,
                ..
            }
        ));
        ui.layout_pop();
    }
}
