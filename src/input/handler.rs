use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    TogglePause,
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
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),
            KeyCode::PageUp => KeyAction::Turn(Direction::In),
            KeyCode::PageDown => KeyAction::Turn(Direction::Out),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                // Latin keys and the same physical keys on a Korean 2-set layout
                'w' | 'ㅈ' => KeyAction::Turn(Direction::Up),
                's' | 'ㄴ' => KeyAction::Turn(Direction::Down),
                'a' | 'ㅁ' => KeyAction::Turn(Direction::Left),
                'd' | 'ㅇ' => KeyAction::Turn(Direction::Right),
                'q' | 'ㅂ' => KeyAction::Turn(Direction::In),
                'e' | 'ㄷ' => KeyAction::Turn(Direction::Out),
                'p' | 'ㅔ' => KeyAction::TogglePause,
                'r' | 'ㄱ' => KeyAction::Restart,
                _ => KeyAction::None,
            },
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

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Turn(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Turn(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Turn(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        for (c, dir) in [
            ('w', Direction::Up),
            ('a', Direction::Left),
            ('s', Direction::Down),
            ('d', Direction::Right),
        ] {
            assert_eq!(
                handler.handle_key_event(press(KeyCode::Char(c))),
                KeyAction::Turn(dir)
            );
        }
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Turn(Direction::Up)
        );
    }

    #[test]
    fn test_depth_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            KeyAction::Turn(Direction::In)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('E'))),
            KeyAction::Turn(Direction::Out)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::PageUp)),
            KeyAction::Turn(Direction::In)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::PageDown)),
            KeyAction::Turn(Direction::Out)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('p'))),
            KeyAction::TogglePause
        );
        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_korean_layout_keys() {
        let handler = InputHandler::new();

        for (c, action) in [
            ('ㅈ', KeyAction::Turn(Direction::Up)),
            ('ㄴ', KeyAction::Turn(Direction::Down)),
            ('ㅁ', KeyAction::Turn(Direction::Left)),
            ('ㅇ', KeyAction::Turn(Direction::Right)),
            ('ㅂ', KeyAction::Turn(Direction::In)),
            ('ㄷ', KeyAction::Turn(Direction::Out)),
            ('ㅔ', KeyAction::TogglePause),
            ('ㄱ', KeyAction::Restart),
        ] {
            assert_eq!(handler.handle_key_event(press(KeyCode::Char(c))), action);
        }
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
