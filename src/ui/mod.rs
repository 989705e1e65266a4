pub mod flappy_scene;
pub mod game_common;
pub mod playfield;
pub mod responsive;

pub use flappy_scene::render_flappy;
