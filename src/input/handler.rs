use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    /// Acknowledge the game over screen
    Confirm,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = direction_for(key.code) {
            return KeyAction::GameAction(Action::Move(direction));
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                ' ' | 'r' => KeyAction::Confirm,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

/// Steering keys: arrows, or WASD in either case
fn direction_for(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Direction::Up,
            's' => Direction::Down,
            'a' => Direction::Left,
            'd' => Direction::Right,
            _ => return None,
        },
        _ => return None,
    };
    Some(direction)
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
