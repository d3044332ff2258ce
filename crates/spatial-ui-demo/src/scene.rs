//! The demo's UI: a control window, a grabbable cube, hot zones and a
//! greeting popup

use glam::{Vec2, Vec3};
use spatial_ui::{
    Bounds, ButtonLayout, Confirm, MoveType, PanelPadding, Pose, SliderNotify, TextContext, Ui,
    UiGesture, UiImage, WindowStyle,
};
use tracing::{debug, info};

const CUBE_SIZE: f32 = 0.06;

/// Speaker icons for the sound toggle
const SOUND_OFF: UiImage = UiImage { id: 1, aspect: 1.0 };
const SOUND_ON: UiImage = UiImage { id: 2, aspect: 1.0 };

/// Application state the UI reads and writes each frame
pub struct DemoScene {
    pub window: Pose,
    pub cube: Pose,
    pub popup: Option<Pose>,
    pub pings: u32,
    pub sound_on: bool,
    pub volume: f32,
    pub name: String,
    pub greeted: Option<String>,
    pub bell_rings: u32,
    pub zone_pinches: u32,
    /// World-space boxes of a few widgets from the last frame, for
    /// scripted input
    pub ping_world: Option<Bounds>,
    pub name_world: Option<Bounds>,
}

impl Default for DemoScene {
    fn default() -> Self {
        Self {
            window: Pose::at(Vec3::new(0.0, 0.15, -0.4)),
            cube: Pose::at(Vec3::new(0.25, -0.15, -0.45)),
            popup: None,
            pings: 0,
            sound_on: true,
            volume: 0.5,
            name: String::new(),
            greeted: None,
            bell_rings: 0,
            zone_pinches: 0,
            ping_world: None,
            name_world: None,
        }
    }
}

impl DemoScene {
    /// Cube's world-space center
    pub fn cube_center(&self) -> Vec3 {
        self.cube.position
    }

    fn window_bounds(&self, local: Bounds) -> Bounds {
        Bounds::new(self.window.transform_point(local.center), local.dimensions)
    }

    /// Issue every widget for one frame
    pub fn draw(&mut self, ui: &mut Ui) {
        self.controls(ui);
        self.cube(ui);
        self.zones(ui);
        self.greeting(ui);
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.window_begin("Controls", &mut self.window, Vec2::new(0.26, 0.0), WindowStyle::Normal, MoveType::FaceUser);

        ui.label("Spatial UI demo");
        ui.hseparator();

        if ui.button("Ping") {
            self.pings += 1;
            info!(pings = self.pings, "Ping");
        }
        self.ping_world = Some(self.window_bounds(ui.layout_last()));
        ui.same_line();
        if ui.toggle_img("Sound", &mut self.sound_on, SOUND_OFF, SOUND_ON, ButtonLayout::Left) {
            info!(on = self.sound_on, "Sound toggled");
        }
        ui.same_line();
        let diameter = ui.line_height();
        if ui.button_round("reset", diameter) {
            info!("Counters reset");
            self.pings = 0;
            self.bell_rings = 0;
            self.zone_pinches = 0;
        }

        ui.text("Push buttons with a fingertip. Pinch the header to move this window.");
        if ui.hslider("Volume", &mut self.volume, 0.0, 1.0, 0.1, 0.0, Confirm::Push, SliderNotify::Finalize) {
            info!(volume = self.volume, "Volume set");
        }

        ui.push_preserve_keyboard(true);
        let edited = ui.input("Name", &mut self.name, Vec2::ZERO, TextContext::Text);
        if edited && ui.has_keyboard_focus() {
            debug!(name = %self.name, "Name edited");
        } else if edited {
            info!(name = %self.name, "Name submitted");
            self.greeted = Some(self.name.clone());
            self.popup = Some(ui.popup_pose(Vec3::ZERO));
        }
        ui.pop_preserve_keyboard();
        self.name_world = Some(self.window_bounds(ui.layout_last()));

        let panel = ui.panel_begin(PanelPadding::Inside);
        ui.label(&format!("Pings {}", self.pings));
        ui.same_line();
        ui.label(&format!("Bell {}", self.bell_rings));
        ui.same_line();
        ui.label(&format!("Pinches {}", self.zone_pinches));
        let _ = ui.panel_end(panel);

        ui.push_enabled(self.sound_on);
        ui.button("Chime");
        ui.pop_enabled();

        ui.window_end();
    }

    fn cube(&mut self, ui: &mut Ui) {
        let bounds = Bounds::new(Vec3::ZERO, Vec3::splat(CUBE_SIZE));
        let held = ui.handle_begin(
            "Cube",
            &mut self.cube,
            bounds,
            true,
            MoveType::Exact,
            UiGesture::PINCH | UiGesture::GRIP,
        );
        ui.label(if held { "held" } else { "cube" });
        ui.handle_end();
    }

    fn zones(&mut self, ui: &mut Ui) {
        // A bell that rings when a hand enters it, and a pinch target
        let bell = Bounds::new(Vec3::new(-0.25, -0.15, -0.45), Vec3::splat(0.05));
        if ui.volume_at("Bell", bell) {
            self.bell_rings += 1;
            info!(rings = self.bell_rings, "Bell");
        }

        let target = Bounds::new(Vec3::new(-0.25, -0.25, -0.45), Vec3::splat(0.05));
        let outcome = ui.volumei_at("Pinch target", target, Confirm::Pinch);
        if outcome.active.is_just_active() {
            self.zone_pinches += 1;
            info!(pinches = self.zone_pinches, interactor = ?outcome.interactor, "Pinch target");
        }

        // Hands hovering the empty space under the window
        let shelf = Bounds::new(Vec3::new(0.0, -0.25, -0.45), Vec3::new(0.2, 0.05, 0.05));
        let (state, hand) = ui.interact_volume_at(shelf);
        if state.is_just_active() {
            info!(hand = ?hand, "Shelf touched");
        }
    }

    fn greeting(&mut self, ui: &mut Ui) {
        let (Some(mut pose), Some(name)) = (self.popup, self.greeted.clone()) else {
            return;
        };
        ui.window_begin("Greeting", &mut pose, Vec2::ZERO, WindowStyle::Body, MoveType::FaceUser);
        ui.label(&format!("Hello, {}", name));
        let close = ui.button("Close");
        ui.window_end();
        self.popup = if close { None } else { Some(pose) };
    }
}
