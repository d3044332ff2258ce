//! Narrow interfaces to the host's renderer, audio, keyboard and text
//! systems
//!
//! The UI records draw commands and sounds during a frame and hands them
//! to these traits in [`crate::Ui::end_frame`].

mod audio;
mod keyboard;
mod render;
mod text;

pub use audio::{AudioBackend, NullAudioBackend, UiSound};
pub use keyboard::{KeyboardBackend, NullKeyboardBackend};
pub use render::{DrawCommand, NullRenderBackend, RenderBackend, UiImage, UiVisual};
pub use text::{MonospaceMeasure, TextMeasure};
