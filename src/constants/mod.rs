//! Tuning constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod animation;
mod camera;
mod figure;
mod ui;

pub use animation::*;
pub use camera::*;
pub use figure::*;
pub use ui::*;
