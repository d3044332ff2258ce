//! Surfaces: local coordinate frames for windows and handles

use glam::{Vec2, Vec3};
use tracing::warn;

use super::Ui;
use crate::spatial::Pose;

impl Ui {
    /// Enter the frame of `pose`. Every interactor is re-expressed in it and
    /// a layout starting at `layout_start` (margin applied) is pushed.
    pub fn push_surface(&mut self, pose: Pose, layout_start: Vec3, layout_dimensions: Vec2) {
        self.hierarchy.push(pose.to_matrix());
        let to_local = self.hierarchy.to_local();
        self.interactors.push_layer(&to_local);
        self.layout.push(layout_start, layout_dimensions, true);
    }

    /// Leave the innermost surface, restoring the enclosing frame
    pub fn pop_surface(&mut self) {
        if self.interactors.layer_depth() == 0 {
            warn!("Tried to pop too many surfaces! Do you have a push/pop mismatch?");
            return;
        }
        self.interactors.pop_layer();
        self.layout_pop();
        self.hierarchy.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FrameInput, HandInput};
    use crate::interactor::InteractorId;

    #[test]
    fn test_surface_localizes_interactors() {
        let mut ui = Ui::default();
        let mut input = FrameInput::default();
        input.hands[1] = HandInput::tracked_at(Vec3::new(0.1, 0.0, -0.5));
        ui.begin_frame(&input);

        ui.push_surface(Pose::at(Vec3::new(0.0, 0.0, -0.5)), Vec3::ZERO, Vec2::ZERO);
        let finger = ui.interactors().get(InteractorId::RIGHT_HAND).finger;
        assert!((finger - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-6);

        ui.push_surface(Pose::at(Vec3::new(0.1, 0.0, 0.0)), Vec3::ZERO, Vec2::ZERO);
        let finger = ui.interactors().get(InteractorId::RIGHT_HAND).finger;
        assert!(finger.length() < 1e-6);

        ui.pop_surface();
        let finger = ui.interactors().get(InteractorId::RIGHT_HAND).finger;
        assert!((finger - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-6);

        ui.pop_surface();
        let finger = ui.interactors().get(InteractorId::RIGHT_HAND).finger;
        assert!((finger - Vec3::new(0.1, 0.0, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_surface_pushes_layout_with_margin() {
        let mut ui = Ui::default();
        ui.begin_frame(&FrameInput::default());
        ui.push_surface(Pose::IDENTITY, Vec3::ZERO, Vec2::new(0.3, 0.0));
        let margin = ui.settings().margin;
        assert!((ui.layout_at() - Vec3::new(-margin, -margin, 0.0)).length() < 1e-6);
        ui.pop_surface();
        assert_eq!(ui.layout_at(), Vec3::ZERO);
    }

    #[test]
    fn test_pop_surface_past_root_is_ignored() {
        let mut ui = Ui::default();
        ui.begin_frame(&FrameInput::default());
        ui.pop_surface();
        assert_eq!(ui.interactors().layer_depth(), 0);
    }
}
