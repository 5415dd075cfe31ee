use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Pause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameAction(Action::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameAction(Action::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameAction(Action::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameAction(Action::Move(Direction::Right))
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Pause,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn turn(direction: Direction) -> KeyAction {
        KeyAction::GameAction(Action::Move(direction))
    }

    #[test]
    fn test_key_map() {
        let handler = InputHandler::new();
        let table = [
            (KeyCode::Up, turn(Direction::Up)),
            (KeyCode::Char('w'), turn(Direction::Up)),
            (KeyCode::Down, turn(Direction::Down)),
            (KeyCode::Char('s'), turn(Direction::Down)),
            (KeyCode::Left, turn(Direction::Left)),
            (KeyCode::Char('a'), turn(Direction::Left)),
            (KeyCode::Right, turn(Direction::Right)),
            (KeyCode::Char('d'), turn(Direction::Right)),
            (KeyCode::Esc, KeyAction::Quit),
            (KeyCode::Char('q'), KeyAction::Quit),
            (KeyCode::Char('r'), KeyAction::Restart),
            (KeyCode::Char(' '), KeyAction::Pause),
            (KeyCode::Char('p'), KeyAction::Pause),
            (KeyCode::Enter, KeyAction::None),
            (KeyCode::Char('x'), KeyAction::None),
        ];

        for (code, expected) in table {
            assert_eq!(handler.handle_key_event(key(code)), expected, "{code:?}");
        }
    }

    #[test]
    fn test_shifted_letters_match_lowercase() {
        let handler = InputHandler::new();
        for c in ['w', 'a', 's', 'd', 'q', 'r', 'p'] {
            let lower = handler.handle_key_event(key(KeyCode::Char(c)));
            let upper = KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), KeyModifiers::SHIFT);
            assert_eq!(handler.handle_key_event(upper), lower, "{c}");
        }
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('c'))), KeyAction::None);
    }
}
