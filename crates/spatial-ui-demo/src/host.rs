//! Frame loop shared by the interactive and scripted modes

use spatial_ui::{RenderBackend, TextEvent, Ui, UiSettings};
use tracing::trace;

use crate::backends::{LogAudio, TerminalKeyboard};
use crate::scene::DemoScene;
use crate::simulator::HandSimulator;

/// Owns the UI, the app state, the simulated hands and the backends
pub struct DemoHost<R: RenderBackend> {
    pub ui: Ui,
    pub scene: DemoScene,
    pub sim: HandSimulator,
    pub renderer: R,
    pub audio: LogAudio,
    pub keyboard: TerminalKeyboard,
}

impl<R: RenderBackend> DemoHost<R> {
    pub fn new(settings: UiSettings, renderer: R) -> Self {
        Self {
            ui: Ui::new(settings),
            scene: DemoScene::default(),
            sim: HandSimulator::new(),
            renderer,
            audio: LogAudio::default(),
            keyboard: TerminalKeyboard::default(),
        }
    }

    /// Run one UI frame with the simulator's current hands, feeding `text`
    /// to whichever field holds the keyboard
    pub fn frame(&mut self, text: &[TextEvent]) {
        let input = self.sim.frame_input();
        self.ui.begin_frame(&input);
        for event in text {
            self.ui.queue_text(*event);
        }
        self.scene.draw(&mut self.ui);
        self.ui
            .end_frame(&mut self.renderer, &mut self.audio, &mut self.keyboard);
        trace!(frame = self.ui.frame_count(), "Demo frame done");
    }

    /// Should key presses go to a text field?
    pub fn typing(&self) -> bool {
        self.keyboard.visible
    }
}
