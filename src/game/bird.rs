//! The player-controlled bird.

use crate::constants::{
    BEAK_ORANGE, BIRD_RADIUS, BIRD_START_Y, BIRD_X, BIRD_YELLOW, BLACK, FLAP_STRENGTH, GRAVITY,
    PLAYFIELD_HEIGHT,
};
use crate::render::{Drawable, Surface};

/// Bird state. Only the vertical axis moves; `x` is fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Vertical center (0 = ceiling, grows downward).
    pub y: f64,
    /// Vertical velocity per tick (negative = upward).
    pub velocity: f64,
    pub radius: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            radius: BIRD_RADIUS,
        }
    }

    /// Velocity override, not additive.
    pub fn flap(&mut self) {
        self.velocity = FLAP_STRENGTH;
    }

    /// Apply one tick of gravity. Returns `false` once the bird touches the
    /// floor. Touching the ceiling clamps the bird but is not fatal.
    pub fn update(&mut self) -> bool {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        if self.y >= self.floor() {
            self.y = self.floor();
            false
        } else if self.y <= self.ceiling() {
            self.y = self.ceiling();
            true
        } else {
            true
        }
    }

    /// Lowest center position allowed.
    pub fn floor(&self) -> f64 {
        PLAYFIELD_HEIGHT - self.radius
    }

    /// Highest center position allowed.
    pub fn ceiling(&self) -> f64 {
        self.radius
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.x + self.radius
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Bird {
    fn draw(&self, surface: &mut dyn Surface) {
        let x = self.x;
        let y = self.y.floor();

        surface.fill_circle((x, y), self.radius, BIRD_YELLOW);
        // Eye
        surface.fill_circle((x + 5.0, y - 3.0), 3.0, BLACK);
        // Beak
        surface.fill_polygon(
            &[(x + 15.0, y), (x + 25.0, y - 3.0), (x + 25.0, y + 3.0)],
            BEAK_ORANGE,
        );
    }
}
