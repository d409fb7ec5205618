//! Key mapping from terminal events to rocket commands.

use crate::types::ControlInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a rocket command.
pub fn control_for_key(key: KeyEvent) -> Option<ControlInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(ControlInput::rows(-1))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(ControlInput::rows(1))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(ControlInput::columns(-1))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(ControlInput::columns(1))
        }

        KeyCode::Char(' ') => Some(ControlInput::fire()),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Accumulates key presses until the next tick takes them.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pending: ControlInput,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Releases are ignored; terminal auto-repeat counts
    /// as another press.
    pub fn push(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(control) = control_for_key(key) {
            self.pending.merge(control);
        }
    }

    /// Command for this tick; resets to neutral.
    pub fn take(&mut self) -> ControlInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Up)),
            Some(ControlInput::rows(-1))
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Down)),
            Some(ControlInput::rows(1))
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Left)),
            Some(ControlInput::columns(-1))
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Right)),
            Some(ControlInput::columns(1))
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(ControlInput::columns(-1))
        );
    }

    #[test]
    fn test_fire_key() {
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(ControlInput::fire())
        );
        assert_eq!(control_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_collector_folds_one_tick() {
        let mut c = InputCollector::new();
        c.push(KeyEvent::from(KeyCode::Left));
        c.push(KeyEvent::from(KeyCode::Up));
        c.push(KeyEvent::from(KeyCode::Right));
        c.push(KeyEvent::from(KeyCode::Char(' ')));

        let input = c.take();
        assert_eq!(input.rows_direction, -1);
        assert_eq!(input.columns_direction, 1);
        assert!(input.fire);

        assert!(c.take().is_neutral());
    }

    #[test]
    fn test_collector_ignores_release() {
        let mut c = InputCollector::new();
        c.push(KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(c.take().is_neutral());
    }
}
