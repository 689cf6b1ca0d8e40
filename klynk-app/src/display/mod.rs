//! Terminal display
//!
//! Screens are plain text; the cook loop writes them to stdout.

pub mod renderer;
pub mod screen;

pub use renderer::Renderer;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
