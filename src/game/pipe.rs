//! Pipe obstacles: a top and bottom segment with a fixed gap between them.

use super::bird::Bird;
use crate::constants::{
    PIPE_GAP, PIPE_GREEN, PIPE_MAX_TOP, PIPE_MIN_TOP, PIPE_SPEED, PIPE_WIDTH, PLAYFIELD_HEIGHT,
    PLAYFIELD_WIDTH,
};
use crate::render::{Drawable, Surface};
use rand::Rng;

/// A single pipe pair scrolling right to left.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Height of the top segment, measured from the ceiling.
    pub top_height: f64,
    /// Height of the bottom segment, measured from the floor.
    pub bottom_height: f64,
    pub width: f64,
    /// Whether the bird has already scored this pipe.
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at the right edge with a uniformly random gap position.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let top = rng.gen_range(PIPE_MIN_TOP..=PIPE_MAX_TOP);
        Self::from_top(top)
    }

    /// Spawn a pipe at the right edge with a known top segment height.
    pub fn with_top_height(top: u32) -> Result<Self, String> {
        if !(PIPE_MIN_TOP..=PIPE_MAX_TOP).contains(&top) {
            return Err(format!(
                "Top height {} outside {}..={}",
                top, PIPE_MIN_TOP, PIPE_MAX_TOP
            ));
        }
        Ok(Self::from_top(top))
    }

    fn from_top(top: u32) -> Self {
        let bottom = PLAYFIELD_HEIGHT as u32 - top - PIPE_GAP;
        Self {
            x: PLAYFIELD_WIDTH,
            top_height: top as f64,
            bottom_height: bottom as f64,
            width: PIPE_WIDTH,
            passed: false,
        }
    }

    /// Scroll one tick to the left.
    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate where the bottom segment starts.
    pub fn bottom_top(&self) -> f64 {
        PLAYFIELD_HEIGHT - self.bottom_height
    }

    /// True once the trailing edge is strictly behind the bird's center.
    pub fn is_behind(&self, bird: &Bird) -> bool {
        self.right_edge() < bird.x
    }

    /// True once the pipe has fully left the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    /// Overlap test against the bird's radius-expanded bounds.
    pub fn collide(&self, bird: &Bird) -> bool {
        let overlaps_x = bird.right() > self.x && bird.left() < self.right_edge();
        if !overlaps_x {
            return false;
        }
        bird.top() < self.top_height || bird.bottom() > self.bottom_top()
    }
}

impl Drawable for Pipe {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.x, 0.0, self.width, self.top_height, PIPE_GREEN);
        surface.fill_rect(
            self.x,
            self.bottom_top(),
            self.width,
            self.bottom_height,
            PIPE_GREEN,
        );
    }
}
