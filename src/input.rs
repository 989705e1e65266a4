//! Maps terminal events to game inputs.

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event. Non-key events (resize, mouse, focus) and key
/// releases yield `None`.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Translate a key event. Space is the only action key.
pub fn map_key(key: &KeyEvent) -> Option<GameInput> {
    // Windows reports releases and repeats too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            GameInput::Quit
        }
        KeyCode::Char(' ') => GameInput::Flap,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_space_flaps() {
        assert_eq!(map_event(&press(KeyCode::Char(' '))), Some(GameInput::Flap));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('Q'))), Some(GameInput::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), Some(GameInput::Quit));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_event(&press(KeyCode::Enter)), Some(GameInput::Other));
        assert_eq!(map_event(&press(KeyCode::Up)), Some(GameInput::Other));
        // Plain 'c' is not a quit
        assert_eq!(map_event(&press(KeyCode::Char('c'))), Some(GameInput::Other));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        });
        assert_eq!(map_event(&release), None);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&mouse), None);
    }
}
