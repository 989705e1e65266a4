//! Scene state: the bird, live pipes, scoring and the active/inactive flow.

use super::bird::Bird;
use super::pipe::Pipe;
use crate::constants::{BLACK, GAME_OVER_TEXT_POS, HIGH_SCORE_TEXT_POS, SCORE_TEXT_POS};
use crate::render::{Drawable, Surface};

/// Text of the prompt shown while the scene is inactive.
pub const GAME_OVER_PROMPT: &str = "Game Over! Press SPACE to restart";

/// Two-state game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneState {
    /// Not started yet, or the last run ended. Physics is frozen.
    #[default]
    Inactive,
    /// A run is in progress.
    Active,
}

/// Current and best score. The high score lives only as long as the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreBoard {
    /// Add one point. Returns true when this raised the high score.
    pub fn increment(&mut self) -> bool {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Start a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Everything the game loop mutates.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub state: SceneState,
    pub bird: Bird,
    /// Live pipes in creation order.
    pub pipes: Vec<Pipe>,
    pub scores: ScoreBoard,
    /// Clock reading (ms) of the last spawn, or of the run start.
    pub last_spawn_ms: u64,
    /// Runs started since launch.
    pub runs: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state == SceneState::Active
    }

    pub fn score(&self) -> u32 {
        self.scores.score
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score
    }

    /// True once a run has ended and the scene is waiting for a restart.
    pub fn is_game_over(&self) -> bool {
        !self.is_active() && self.runs > 0
    }

    /// Begin a fresh run at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.runs += 1;
        self.state = SceneState::Active;
        self.bird = Bird::new();
        self.pipes.clear();
        self.scores.reset();
        self.last_spawn_ms = now_ms;
    }

    fn draw_scores(&self, surface: &mut dyn Surface) {
        let (x, y) = SCORE_TEXT_POS;
        surface.text(x, y, &format!("Score: {}", self.scores.score), BLACK);
        let (x, y) = HIGH_SCORE_TEXT_POS;
        surface.text(
            x,
            y,
            &format!("High Score: {}", self.scores.high_score),
            BLACK,
        );
    }
}

impl Drawable for Scene {
    /// Pipes in creation order, then the bird, then the score overlay.
    /// Inactive frames show only the restart prompt and the scores.
    fn draw(&self, surface: &mut dyn Surface) {
        match self.state {
            SceneState::Active => {
                for pipe in &self.pipes {
                    pipe.draw(surface);
                }
                self.bird.draw(surface);
            }
            SceneState::Inactive => {
                let (x, y) = GAME_OVER_TEXT_POS;
                surface.text(x, y, GAME_OVER_PROMPT, BLACK);
            }
        }
        self.draw_scores(surface);
    }
}
