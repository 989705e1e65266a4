use crate::render::Rgb;

// Playfield dimensions (logical units, y grows downward)
pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// Frame timing. Physics constants below are per-tick at this rate.
pub const TARGET_FPS: u64 = 60;
pub const FRAME_MS: f64 = 1000.0 / TARGET_FPS as f64;

// Bird physics
pub const GRAVITY: f64 = 0.25;
pub const FLAP_STRENGTH: f64 = -7.0;
pub const BIRD_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 300.0; // PLAYFIELD_HEIGHT / 2
pub const BIRD_RADIUS: f64 = 15.0;

// Pipes
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_GAP: u32 = 150;
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;
pub const PIPE_MIN_TOP: u32 = 50;
pub const PIPE_MAX_TOP: u32 = 400; // PLAYFIELD_HEIGHT - 200

// Colors
pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
pub const PIPE_GREEN: Rgb = Rgb(0, 255, 0);
pub const BIRD_YELLOW: Rgb = Rgb(255, 255, 0);
pub const BEAK_ORANGE: Rgb = Rgb(255, 165, 0);
pub const BLACK: Rgb = Rgb(0, 0, 0);

// Text overlay positions
pub const SCORE_TEXT_POS: (f64, f64) = (10.0, 10.0);
pub const HIGH_SCORE_TEXT_POS: (f64, f64) = (10.0, 50.0);
pub const GAME_OVER_TEXT_POS: (f64, f64) = (PLAYFIELD_WIDTH / 2.0 - 180.0, PLAYFIELD_HEIGHT / 2.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_match_playfield() {
        assert_eq!(BIRD_START_Y, PLAYFIELD_HEIGHT / 2.0);
        assert_eq!(PIPE_MAX_TOP as f64, PLAYFIELD_HEIGHT - 200.0);
        assert!(PIPE_MIN_TOP < PIPE_MAX_TOP);
        // The lowest possible gap must still leave a bottom segment.
        assert!(PIPE_MAX_TOP + PIPE_GAP < PLAYFIELD_HEIGHT as u32);
    }
}
