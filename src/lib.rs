//! Flappy - a terminal Flappy Bird.
//!
//! The game core (`game`) is independent of the terminal: it consumes inputs,
//! clock readings and an RNG, and emits draw calls through `render::Surface`.
//! The `ui` module paints those draw calls with ratatui.

pub mod build_info;
pub mod clock;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
