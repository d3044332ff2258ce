//! spatial-ui: immediate-mode spatial UI for hand and ray interaction
//!
//! This crate provides:
//! - Focus and activation resolution across four competing interactors
//!   (two fingertips, two hand rays) with hysteresis and priority ties
//! - Nested surfaces that re-express interactors in local space
//! - A layout cursor with wrapping, cuts, panels and auto-sized windows
//! - Buttons (plain, image and round), toggles, sliders, draggable
//!   handles, windows, hot zones and text inputs
//! - Narrow backend traits for rendering, audio, the keyboard and text
//!   measurement

pub mod animation;
pub mod backend;
pub mod id;
pub mod input;
pub mod interactor;
pub mod layout;
pub mod settings;
pub mod spatial;
pub mod state;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use backend::{
    AudioBackend, DrawCommand, KeyboardBackend, MonospaceMeasure, NullAudioBackend, NullKeyboardBackend,
    NullRenderBackend, RenderBackend, TextMeasure, UiImage, UiSound, UiVisual,
};
pub use id::IdHash;
pub use input::{FrameInput, HandInput, Handed, PointerInput, TextContext, TextEvent};
pub use interactor::{InteractorId, InteractorKind};
pub use layout::{Cut, PanelPadding};
pub use settings::{ConfigError, UiSettings};
pub use spatial::{Bounds, Pose, Ray};
pub use state::ButtonState;
pub use theme::{Color, Palette, UiColor};
pub use ui::{
    ButtonLayout, ButtonOutcome, Confirm, Interaction, MoveType, SliderNotify, Ui, UiGesture, VolumeOutcome,
    WindowStyle,
};
