//! Input listener: turns key events into pending-heading writes and controls.
//!
//! Steering never reaches the game state directly; it only overwrites the
//! shared [`PendingHeading`], which the tick loop reads once per tick. Several
//! presses between two ticks collapse to the last one.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::PendingHeading;
use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Non-steering outcome of a key press, for the front end to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Reset,
    Quit,
}

#[derive(Debug, Clone)]
pub struct InputListener {
    pending: PendingHeading,
}

impl InputListener {
    pub fn new(pending: PendingHeading) -> Self {
        Self { pending }
    }

    /// Handle one key event.
    ///
    /// Only presses count; repeats and releases are ignored, as are unmapped
    /// keys.
    pub fn handle_key(&self, key: KeyEvent) -> Option<ListenerCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if should_quit(key) {
            return Some(ListenerCommand::Quit);
        }

        match handle_key_event(key)? {
            GameAction::Steer(heading) => {
                self.pending.set(heading);
                log::trace!("pending heading {}", heading.as_str());
                None
            }
            GameAction::Restart => Some(ListenerCommand::Reset),
        }
    }

    pub fn pending_heading(&self) -> &PendingHeading {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Heading;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_steering_writes_pending_heading() {
        let listener = InputListener::new(PendingHeading::default());
        assert_eq!(listener.handle_key(press(KeyCode::Up)), None);
        assert_eq!(listener.pending_heading().load(), Heading::Up);
    }

    #[test]
    fn test_last_press_wins() {
        let pending = PendingHeading::default();
        let listener = InputListener::new(pending.clone());
        listener.handle_key(press(KeyCode::Up));
        listener.handle_key(press(KeyCode::Left));
        listener.handle_key(press(KeyCode::Down));
        assert_eq!(pending.load(), Heading::Down);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let listener = InputListener::new(PendingHeading::default());
        listener.handle_key(press(KeyCode::Left));
        assert_eq!(listener.handle_key(press(KeyCode::Char('x'))), None);
        assert_eq!(listener.handle_key(press(KeyCode::F(5))), None);
        assert_eq!(listener.pending_heading().load(), Heading::Left);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let listener = InputListener::new(PendingHeading::default());
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(listener.handle_key(release), None);
        assert_eq!(listener.handle_key(repeat), None);
        assert_eq!(listener.pending_heading().load(), Heading::Right);
    }

    #[test]
    fn test_controls() {
        let listener = InputListener::new(PendingHeading::default());
        assert_eq!(
            listener.handle_key(press(KeyCode::Char('r'))),
            Some(ListenerCommand::Reset)
        );
        assert_eq!(
            listener.handle_key(press(KeyCode::Char('q'))),
            Some(ListenerCommand::Quit)
        );
        assert_eq!(
            listener.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ListenerCommand::Quit)
        );
    }
}
