//! Per-tick game logic: input handling, physics, spawning, scoring and
//! collision.

use super::pipe::Pipe;
use super::scene::{Scene, SceneState};
use crate::constants::PIPE_SPAWN_INTERVAL_MS;
use rand::Rng;

/// Input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// The single action key (Space): flap, or start a new run.
    Flap,
    /// Window close (Esc, q, Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// What an input did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Started,
    Flapped,
    Quit,
    Ignored,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ground,
    Pipe,
}

/// Things that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    PipeSpawned { top_height: u32 },
    PipePassed { score: u32 },
    NewHighScore { high_score: u32 },
    Crashed { cause: CrashCause, score: u32 },
}

/// Process one input event at clock time `now_ms`.
pub fn process_input(scene: &mut Scene, input: GameInput, now_ms: u64) -> InputOutcome {
    match input {
        GameInput::Quit => InputOutcome::Quit,
        GameInput::Other => InputOutcome::Ignored,
        GameInput::Flap => match scene.state {
            SceneState::Active => {
                scene.bird.flap();
                InputOutcome::Flapped
            }
            SceneState::Inactive => {
                scene.restart(now_ms);
                InputOutcome::Started
            }
        },
    }
}

/// Advance the scene by one tick at clock time `now_ms`.
///
/// A crash flips the scene to inactive but the rest of the tick still runs:
/// every pipe is moved, scored and checked before returning.
pub fn process_tick<R: Rng>(scene: &mut Scene, now_ms: u64, rng: &mut R) -> Vec<SceneEvent> {
    let mut events = Vec::new();

    if !scene.is_active() {
        return events;
    }

    if !scene.bird.update() {
        scene.state = SceneState::Inactive;
        events.push(SceneEvent::Crashed {
            cause: CrashCause::Ground,
            score: scene.scores.score,
        });
    }

    if now_ms.saturating_sub(scene.last_spawn_ms) > PIPE_SPAWN_INTERVAL_MS {
        let pipe = Pipe::new(rng);
        events.push(SceneEvent::PipeSpawned {
            top_height: pipe.top_height as u32,
        });
        scene.pipes.push(pipe);
        scene.last_spawn_ms = now_ms;
    }

    let mut hit_pipe = false;

    for pipe in scene.pipes.iter_mut() {
        pipe.update();

        if !pipe.passed && pipe.is_behind(&scene.bird) {
            pipe.passed = true;
            let new_best = scene.scores.increment();
            events.push(SceneEvent::PipePassed {
                score: scene.scores.score,
            });
            if new_best {
                events.push(SceneEvent::NewHighScore {
                    high_score: scene.scores.high_score,
                });
            }
        }

        if pipe.collide(&scene.bird) {
            hit_pipe = true;
        }
    }

    if hit_pipe {
        // Only report the first crash of a tick
        if scene.state == SceneState::Active {
            events.push(SceneEvent::Crashed {
                cause: CrashCause::Pipe,
                score: scene.scores.score,
            });
        }
        scene.state = SceneState::Inactive;
    }

    scene.pipes.retain(|pipe| !pipe.is_off_screen());

    events
}
