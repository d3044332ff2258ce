//! Animation helpers for element feedback

mod easing;
mod flash;

pub use easing::Easing;
pub use flash::FlashAnimation;
