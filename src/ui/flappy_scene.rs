//! Terminal rendering of the game scene.

use super::game_common::{render_status_bar, CONTROLS};
use super::playfield::{fit_playfield, render_playfield};
use super::responsive::{is_too_small, render_too_small};
use crate::game::Scene;
use crate::render::DrawList;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Render one frame of the game.
pub fn render_flappy(frame: &mut Frame, scene: &Scene) {
    let area = frame.size();
    if is_too_small(area) {
        render_too_small(frame, area);
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Playfield (top) + status bar (bottom 2 lines)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(inner);

    let list = DrawList::capture(scene);
    render_playfield(frame, fit_playfield(chunks[0]), &list);

    let (status, color) = status_text(scene);
    render_status_bar(frame, chunks[1], &status, color, &CONTROLS);
}

fn status_text(scene: &Scene) -> (String, Color) {
    if scene.is_active() {
        (format!("Score: {}", scene.score()), Color::Green)
    } else if scene.is_game_over() {
        (
            format!("Crashed at {}! Space to restart", scene.score()),
            Color::Red,
        )
    } else {
        ("Press Space to start!".to_string(), Color::Yellow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{SceneState, GAME_OVER_PROMPT};
    use crate::ui::responsive::{MIN_COLS, MIN_ROWS};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_rows(scene: &Scene, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_flappy(frame, scene)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn render_to_string(scene: &Scene, width: u16, height: u16) -> String {
        render_rows(scene, width, height).concat()
    }

    /// Row indices containing `text`.
    fn rows_with(rows: &[String], text: &str) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| row.contains(text))
            .map(|(i, _)| i)
            .collect()
    }

    fn assert_overlay_visible(scene: &Scene, width: u16, height: u16) {
        let rows = render_rows(scene, width, height);
        let context = || format!("{}x{}:\n{}", width, height, rows.join("\n"));

        assert_eq!(rows_with(&rows, GAME_OVER_PROMPT).len(), 1, "{}", context());

        let score = format!("Score: {}", scene.score());
        let high = format!("High Score: {}", scene.high_score());
        let high_rows = rows_with(&rows, &high);
        assert_eq!(high_rows.len(), 1, "{}", context());
        // The plain score line sits on its own row above the high score
        let score_rows: Vec<usize> = rows_with(&rows, &score)
            .into_iter()
            .filter(|&i| !rows[i].contains("High Score"))
            .collect();
        assert_eq!(score_rows.len(), 1, "{}", context());
        assert!(score_rows[0] < high_rows[0], "{}", context());
    }

    #[test]
    fn test_status_text_follows_state() {
        let mut scene = Scene::new();
        assert_eq!(status_text(&scene).0, "Press Space to start!");
        scene.restart(0);
        scene.scores.increment();
        assert_eq!(status_text(&scene), ("Score: 1".to_string(), Color::Green));
        scene.state = SceneState::Inactive;
        assert_eq!(
            status_text(&scene),
            ("Crashed at 1! Space to restart".to_string(), Color::Red)
        );
    }

    #[test]
    fn test_inactive_frame_renders_prompt() {
        let scene = Scene::new();
        let screen = render_to_string(&scene, 100, 40);
        assert!(screen.contains("Flappy Bird"));
        assert!(screen.contains("Press Space to start!"));
        assert!(screen.contains("[Space] Flap"));
    }

    #[test]
    fn test_overlay_fits_at_minimum_size() {
        let mut scene = Scene::new();
        scene.scores.high_score = 12;
        assert_overlay_visible(&scene, MIN_COLS, MIN_ROWS);
    }

    #[test]
    fn test_overlay_fits_above_minimum_size() {
        let mut scene = Scene::new();
        scene.scores.high_score = 3;
        for width in (MIN_COLS..=120).step_by(9) {
            for height in (MIN_ROWS..=60).step_by(5) {
                assert_overlay_visible(&scene, width, height);
            }
        }
    }

    #[test]
    fn test_crashed_frame_offers_restart() {
        let mut scene = Scene::new();
        scene.restart(0);
        scene.scores.increment();
        scene.state = SceneState::Inactive;
        let rows = render_rows(&scene, MIN_COLS, MIN_ROWS);
        assert_eq!(rows_with(&rows, "Crashed at 1! Space to restart").len(), 1);
        assert!(rows_with(&rows, "Press Space to start!").is_empty());
        assert_overlay_visible(&scene, MIN_COLS, MIN_ROWS);
    }

    #[test]
    fn test_too_small_terminal() {
        let scene = Scene::new();
        let screen = render_to_string(&scene, 30, 10);
        assert!(screen.contains("Terminal too small"));
    }
}
