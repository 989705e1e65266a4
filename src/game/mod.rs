//! Flappy game core.
//!
//! The player keeps a bird airborne by pressing Space to flap. Gravity pulls
//! the bird down each tick and pipes scroll in from the right. Touching the
//! floor or a pipe ends the run; the ceiling only stops the bird.
//! Nothing here touches the terminal: the runtime feeds inputs, clock
//! readings and an RNG in, and reads draw calls back out.

pub mod bird;
pub mod logic;
pub mod pipe;
pub mod scene;

pub use bird::Bird;
pub use logic::*;
pub use pipe::Pipe;
pub use scene::*;
