use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Decodes a key press. Keys that mean nothing to the game give `None`.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Turn(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Turn(Direction::Down)));
        assert_eq!(command_for(&key(KeyCode::Left)), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for(&key(KeyCode::Right)), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('w'))), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for(&key(KeyCode::Char('S'))), Some(Command::Turn(Direction::Down)));
        assert_eq!(command_for(&key(KeyCode::Char('D'))), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
    }
}
