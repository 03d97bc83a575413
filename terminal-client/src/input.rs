//! Key mapping from terminal events to the engine's key vocabulary.

use common::game::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Reset),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Key::Down)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Key::Left)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Key::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Key::Up)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(Key::Down)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Key::Left)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(Key::Right)
        );
    }

    #[test]
    fn test_reset_key() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(Key::Reset)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(Key::Reset)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
