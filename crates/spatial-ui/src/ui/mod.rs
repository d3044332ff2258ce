//! The immediate-mode UI context
//!
//! A [`Ui`] owns all state that lives across frames: the interactor table,
//! the id, layout, enabled and preserve-keyboard stacks, the surface
//! hierarchy, window measurements and the text-entry target. A host drives
//! it once per rendered frame:
//!
//! ```no_run
//! use spatial_ui::{FrameInput, NullAudioBackend, NullKeyboardBackend, NullRenderBackend, Ui};
//!
//! let mut ui = Ui::default();
//! let input = FrameInput::default();
//! ui.begin_frame(&input);
//! if ui.button("Hello") {
//!     println!("pressed");
//! }
//! ui.end_frame(&mut NullRenderBackend, &mut NullAudioBackend, &mut NullKeyboardBackend);
//! ```

mod button;
mod draw;
mod handle;
mod interaction;
mod label;
mod slider;
mod surface;
mod text_input;
mod volume;
mod window;

pub use button::{ButtonLayout, ButtonOutcome};
pub use handle::{MoveType, UiGesture};
pub use interaction::Interaction;
pub use slider::SliderNotify;
pub use volume::{Confirm, VolumeOutcome};
pub use window::WindowStyle;

use std::collections::{HashMap, VecDeque};

use glam::{Vec2, Vec3};
use tracing::{debug, trace, warn};

use crate::animation::FlashAnimation;
use crate::backend::{
    AudioBackend, DrawCommand, KeyboardBackend, MonospaceMeasure, RenderBackend, TextMeasure, UiSound,
};
use crate::id::{IdHash, IdStack};
use crate::input::{FrameInput, Handed, TextContext, TextEvent};
use crate::interactor::{Interactor, InteractorId, InteractorRegistry};
use crate::layout::{Cut, LayoutMetrics, LayoutStack, PanelPadding, PendingPanel};
use crate::settings::UiSettings;
use crate::spatial::{look_at, Bounds, Hierarchy, Pose};
use crate::state::ButtonState;
use crate::theme::Palette;

use handle::GrabBaselines;
use text_input::TextEntry;
use window::WindowState;

/// Immediate-mode spatial UI context
pub struct Ui {
    settings: UiSettings,
    pending_settings: Option<UiSettings>,
    palette: Palette,
    text_measure: Option<Box<dyn TextMeasure>>,

    ids: IdStack,
    layout: LayoutStack,
    hierarchy: Hierarchy,
    interactors: InteractorRegistry,
    enabled_stack: Vec<bool>,
    preserve_keyboard_stack: Vec<bool>,

    last_element: Option<IdHash>,
    show_volumes: bool,
    far_interact: bool,
    anim: FlashAnimation,

    input: FrameInput,
    in_frame: bool,
    frame: u64,

    draws: Vec<DrawCommand>,
    sounds: Vec<(UiSound, Vec3)>,
    keyboard_request: Option<(bool, TextContext)>,
    text_queue: VecDeque<TextEvent>,
    text_entry: TextEntry,

    grab: GrabBaselines,
    windows: HashMap<IdHash, WindowState>,
    window_stack: Vec<IdHash>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(UiSettings::default())
    }
}

impl Ui {
    pub fn new(settings: UiSettings) -> Self {
        let metrics = LayoutMetrics::from_settings(&settings, settings.text_height);
        Self {
            settings,
            pending_settings: None,
            palette: Palette::default(),
            text_measure: None,
            ids: IdStack::new(),
            layout: LayoutStack::new(metrics),
            hierarchy: Hierarchy::new(),
            interactors: InteractorRegistry::new(),
            enabled_stack: vec![true],
            preserve_keyboard_stack: vec![false],
            last_element: None,
            show_volumes: false,
            far_interact: true,
            anim: FlashAnimation::default(),
            input: FrameInput::default(),
            in_frame: false,
            frame: 0,
            draws: Vec::new(),
            sounds: Vec::new(),
            keyboard_request: None,
            text_queue: VecDeque::new(),
            text_entry: TextEntry::default(),
            grab: GrabBaselines::default(),
            windows: HashMap::new(),
            window_stack: Vec::new(),
        }
    }

    /// Use a palette other than the default
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Measure text with something other than the built-in monospace
    /// metrics
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.text_measure = Some(Box::new(measure));
        self
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    /// Replace the spacing settings. Inside a frame the change waits for
    /// the next [`Ui::begin_frame`].
    pub fn set_settings(&mut self, settings: UiSettings) {
        if self.in_frame {
            debug!("Settings changed mid-frame, deferring to the next frame");
            self.pending_settings = Some(settings);
        } else {
            self.settings = settings;
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// The interactor table, for inspection
    pub fn interactors(&self) -> &InteractorRegistry {
        &self.interactors
    }

    /// Input as given to the current frame
    pub fn frame_input(&self) -> &FrameInput {
        &self.input
    }

    pub fn time(&self) -> f32 {
        self.input.time
    }

    /// Number of frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    // Frame protocol

    /// Start a frame: pull in input, reset every stack to its root and
    /// rotate interaction state. Call before any widget.
    pub fn begin_frame(&mut self, input: &FrameInput) {
        if self.in_frame {
            warn!("begin_frame called twice without end_frame");
        }
        if let Some(settings) = self.pending_settings.take() {
            self.settings = settings;
        }
        self.input = input.clone();
        self.frame += 1;

        let open_ids = self.ids.reset();
        if open_ids > 0 {
            warn!(open = open_ids, "Id scopes left open from the previous frame");
        }
        if self.enabled_stack.len() > 1 {
            warn!(open = self.enabled_stack.len() - 1, "'enabled' pushes left open from the previous frame");
        }
        self.enabled_stack.clear();
        self.enabled_stack.push(true);
        if self.preserve_keyboard_stack.len() > 1 {
            warn!(
                open = self.preserve_keyboard_stack.len() - 1,
                "Preserve keyboard pushes left open from the previous frame"
            );
        }
        self.preserve_keyboard_stack.clear();
        self.preserve_keyboard_stack.push(false);

        let metrics = LayoutMetrics::from_settings(&self.settings, self.char_height());
        let open_layouts = self.layout.reset(metrics);
        if open_layouts > 0 {
            warn!(open = open_layouts, "Layouts left open from the previous frame");
        }
        if self.hierarchy.depth() > 0 {
            warn!(open = self.hierarchy.depth(), "Surfaces left open from the previous frame");
        }
        self.hierarchy.reset();
        if !self.window_stack.is_empty() {
            warn!(open = self.window_stack.len(), "Windows left open from the previous frame");
            self.window_stack.clear();
        }

        let to_local = self.hierarchy.to_local();
        self.interactors.refresh(input, &to_local);
        self.in_frame = true;
        trace!(frame = self.frame, time = input.time, "Frame started");
    }

    /// Finish a frame: close anything left open, then hand queued draws,
    /// sounds and keyboard requests to the backends
    pub fn end_frame<R, A, K>(&mut self, renderer: &mut R, audio: &mut A, keyboard: &mut K)
    where
        R: RenderBackend + ?Sized,
        A: AudioBackend + ?Sized,
        K: KeyboardBackend + ?Sized,
    {
        if !self.in_frame {
            warn!("end_frame called without begin_frame");
        }
        if !self.window_stack.is_empty() {
            warn!(open = self.window_stack.len(), "Windows left open at the end of the frame");
            while !self.window_stack.is_empty() {
                self.window_end();
            }
        }
        let open_surfaces = self.interactors.layer_depth();
        if open_surfaces > 0 {
            warn!(open = open_surfaces, "Surfaces left open at the end of the frame");
            for _ in 0..open_surfaces {
                self.pop_surface();
            }
        }

        for command in self.draws.drain(..) {
            renderer.submit(&command);
        }
        for (sound, at) in self.sounds.drain(..) {
            audio.play(sound, at);
        }
        if let Some((visible, context)) = self.keyboard_request.take() {
            debug!(visible, ?context, "Keyboard visibility requested");
            keyboard.set_visible(visible, context);
        }
        if !self.text_queue.is_empty() {
            trace!(discarded = self.text_queue.len(), "Unconsumed text events dropped");
            self.text_queue.clear();
        }

        let frame = self.frame;
        self.windows.retain(|_, window| frame - window.last_seen <= 1);
        self.in_frame = false;
    }

    /// Commands recorded so far this frame
    pub fn draw_commands(&self) -> &[DrawCommand] {
        &self.draws
    }

    /// Queue a text event for the focused text input
    pub fn queue_text(&mut self, event: TextEvent) {
        self.text_queue.push_back(event);
    }

    /// Queue each character of `text` as typed input
    pub fn queue_text_str(&mut self, text: &str) {
        self.text_queue.extend(text.chars().map(TextEvent::from));
    }

    fn request_keyboard(&mut self, visible: bool, context: TextContext) {
        self.keyboard_request = Some((visible, context));
    }

    // Ids

    pub fn stack_hash(&self, label: &str) -> IdHash {
        self.ids.stack_hash(label)
    }

    pub fn stack_hash_int(&self, id: i32) -> IdHash {
        self.ids.stack_hash_int(id)
    }

    pub fn push_id(&mut self, label: &str) -> IdHash {
        self.ids.push_id(label)
    }

    pub fn push_id_int(&mut self, id: i32) -> IdHash {
        self.ids.push_id_int(id)
    }

    pub fn pop_id(&mut self) {
        self.ids.pop_id();
    }

    // Enabled and preserve-keyboard stacks

    /// Elements inside a disabled scope never gain focus and draw dimmed
    pub fn push_enabled(&mut self, enabled: bool) {
        self.enabled_stack.push(enabled);
    }

    pub fn pop_enabled(&mut self) {
        if self.enabled_stack.len() <= 1 {
            warn!("Tried to pop too many 'enabled's! Do you have a push/pop mismatch?");
            return;
        }
        self.enabled_stack.pop();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled_stack.last().copied().unwrap_or(true)
    }

    /// Elements created while this is true don't take keyboard focus away
    /// from the active text input
    pub fn push_preserve_keyboard(&mut self, preserve: bool) {
        self.preserve_keyboard_stack.push(preserve);
    }

    pub fn pop_preserve_keyboard(&mut self) {
        if self.preserve_keyboard_stack.len() <= 1 {
            warn!("Tried to pop too many preserve keyboards! Do you have a push/pop mismatch?");
            return;
        }
        self.preserve_keyboard_stack.pop();
    }

    /// Record `id` as the most recent element and register it with the
    /// preserve-keyboard set when that scope is active
    fn mark_element(&mut self, id: IdHash) {
        self.last_element = Some(id);
        if self.preserve_keyboard_stack.last().copied().unwrap_or(false) {
            self.interactors.preserve_keyboard_add(id);
        }
    }

    // Toggles

    /// Draw a debug box for every volume that gets hit-tested
    pub fn show_volumes(&mut self, show: bool) {
        self.show_volumes = show;
    }

    pub fn enable_far_interact(&mut self, enable: bool) {
        self.far_interact = enable;
    }

    pub fn far_interact_enabled(&self) -> bool {
        self.far_interact
    }

    // Flash animation

    pub fn anim_start(&mut self, id: IdHash) {
        self.anim.start(id, self.input.time);
    }

    pub fn anim_has(&mut self, id: IdHash, duration: f32) -> bool {
        self.anim.has(id, duration, self.input.time)
    }

    pub fn anim_elapsed(&self, id: IdHash, duration: f32) -> f32 {
        self.anim.elapsed(id, duration, self.input.time)
    }

    // Layout

    pub fn layout_push(&mut self, start: Vec3, dimensions: Vec2, add_margin: bool) {
        self.layout.push(start, dimensions, add_margin);
    }

    pub fn layout_push_cut(&mut self, cut: Cut, size: f32, add_margin: bool) {
        self.layout.push_cut(cut, size, add_margin);
    }

    pub fn layout_pop(&mut self) {
        if let Some(measure) = self.layout.pop() {
            self.apply_window_measure(measure);
        }
    }

    /// Reserve a slot in the current layout and get its box, `depth` deep
    pub fn layout_reserve(&mut self, size: Vec2, add_padding: bool, depth: f32) -> Bounds {
        self.layout.reserve_bounds(size, add_padding, depth)
    }

    pub fn layout_remaining(&self) -> Vec2 {
        self.layout.remaining()
    }

    pub fn layout_at(&self) -> Vec3 {
        self.layout.at()
    }

    pub fn layout_last(&self) -> Bounds {
        self.layout.last()
    }

    pub fn next_line(&mut self) {
        self.layout.next_line();
    }

    pub fn same_line(&mut self) {
        self.layout.same_line();
    }

    pub fn space(&mut self, space: f32) {
        self.layout.space(space);
    }

    pub fn line_height(&self) -> f32 {
        self.layout.line_height()
    }

    /// Open a panel; its background is drawn by [`Ui::panel_end`] once the
    /// content size is known
    pub fn panel_begin(&mut self, padding: PanelPadding) -> PendingPanel {
        self.layout.panel_begin(padding)
    }

    pub fn panel_end(&mut self, panel: PendingPanel) -> Bounds {
        let bounds = self.layout.panel_end(panel);
        self.draw_panel(&bounds);
        bounds
    }

    // Text measurement

    fn char_height(&self) -> f32 {
        match &self.text_measure {
            Some(measure) => measure.char_height(),
            None => self.settings.text_height,
        }
    }

    fn text_size(&self, text: &str) -> Vec2 {
        match &self.text_measure {
            Some(measure) => measure.size(text),
            None => MonospaceMeasure::new(self.settings.text_height).size(text),
        }
    }

    fn caret_offset(&self, text: &str, caret: usize) -> Vec2 {
        match &self.text_measure {
            Some(measure) => measure.caret_offset(text, caret),
            None => MonospaceMeasure::new(self.settings.text_height).caret_offset(text, caret),
        }
    }

    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        match &self.text_measure {
            Some(measure) => measure.wrap(text, max_width),
            None => MonospaceMeasure::new(self.settings.text_height).wrap(text, max_width),
        }
    }

    // Queries

    /// Did the most recent element change hands between active and not,
    /// for either hand?
    pub fn last_element_active(&self) -> ButtonState {
        self.last_element_state(|actor, id| (actor.active_prev == id, actor.active == id))
    }

    /// Focus of the most recent element. Uses the last two settled frames,
    /// since focus can still move during the current one.
    pub fn last_element_focused(&self) -> ButtonState {
        self.last_element_state(|actor, id| (actor.focused_prev_prev == id, actor.focused_prev == id))
    }

    pub fn last_element_hand_active(&self, hand: Handed) -> ButtonState {
        self.last_element_hand_state(hand, |actor, id| (actor.active_prev == id, actor.active == id))
    }

    pub fn last_element_hand_focused(&self, hand: Handed) -> ButtonState {
        self.last_element_hand_state(hand, |actor, id| {
            (actor.focused_prev_prev == id, actor.focused_prev == id)
        })
    }

    /// Either active or focused, per hand
    pub fn last_element_hand_used(&self, hand: Handed) -> ButtonState {
        self.last_element_hand_state(hand, |actor, id| {
            (
                actor.active_prev == id || actor.focused_prev_prev == id,
                actor.active == id || actor.focused_prev == id,
            )
        })
    }

    fn last_element_state(&self, test: impl Fn(&Interactor, IdHash) -> (bool, bool)) -> ButtonState {
        let Some(id) = self.last_element else {
            return ButtonState::INACTIVE;
        };
        let (mut was, mut is) = (false, false);
        for hand in Handed::ALL {
            let (w, i) = test(self.interactors.get(InteractorId::hand(hand)), id);
            was |= w;
            is |= i;
        }
        ButtonState::from_transition(was, is)
    }

    fn last_element_hand_state(
        &self,
        hand: Handed,
        test: impl Fn(&Interactor, IdHash) -> (bool, bool),
    ) -> ButtonState {
        let Some(id) = self.last_element else {
            return ButtonState::INACTIVE;
        };
        let (was, is) = test(self.interactors.get(InteractorId::hand(hand)), id);
        ButtonState::from_transition(was, is)
    }

    /// Is this hand busy with any element?
    pub fn is_interacting(&self, hand: Handed) -> bool {
        let actor = self.interactors.get(InteractorId::hand(hand));
        actor.active_prev.is_some() || actor.focused_prev.is_some()
    }

    /// Was any interactor focused on `id` last frame?
    pub fn id_focused(&self, id: IdHash) -> bool {
        self.interactors.id_focused(id)
    }

    /// The interactor that was active on `id` last frame
    pub fn last_active_hand(&self, id: IdHash) -> Option<InteractorId> {
        self.interactors.last_active(id)
    }

    /// A pose for a popup: most of the way from the head toward the
    /// element in use, else the most outstretched fingertip, else a spot
    /// in front of the head. It faces the head.
    pub fn popup_pose(&self, shift: Vec3) -> Pose {
        let head = self.input.head;
        let at = if self.last_element_active().is_active() {
            self.hierarchy.to_world_point(self.layout.last().center)
        } else {
            let left = self.input.hand(Handed::Left);
            let right = self.input.hand(Handed::Right);
            match (left.tracked, right.tracked) {
                (true, true) => {
                    let (pl, pr) = (left.fingertip, right.fingertip);
                    let reach_l = pl.distance(head.position) + (pl.y - pr.y) / 2.0;
                    let reach_r = pr.distance(head.position) + (pr.y - pl.y) / 2.0;
                    if reach_l > reach_r {
                        pl
                    } else {
                        pr
                    }
                }
                (true, false) => left.fingertip,
                (false, true) => right.fingertip,
                (false, false) => head.position + head.forward() * 0.35,
            }
        };

        let dir = at - head.position;
        let at = head.position + dir * 0.7;
        Pose::new(at + shift, look_at(Vec3::ZERO, -dir))
    }
}
