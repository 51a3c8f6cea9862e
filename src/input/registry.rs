//! Command registry for dispatching keyboard input to commands.
//!
//! Priority:
//! 1. Ctrl+C always quits
//! 2. An open notification captures every other key
//! 3. Global bindings
//! 4. Bindings of the focused panel
//! 5. Printable characters when a text field is focused

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Context needed to resolve a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub focus: Focus,
    pub notification_open: bool,
}

impl InputContext {
    pub fn new(focus: Focus) -> Self {
        Self {
            focus,
            notification_open: false,
        }
    }

    pub fn with_notification(mut self, open: bool) -> Self {
        self.notification_open = open;
        self
    }
}

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key event to a command. `None` means the key is ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.notification_open {
            return Some(
                self.config
                    .get_notification(&combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            );
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd.clone());
        }

        if context.focus.is_text_entry() {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return Some(Command::InsertChar(c));
                }
            }
        }

        None
    }
}
