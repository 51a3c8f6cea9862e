//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Focus;
use crate::state::InputMode;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding tables, looked up global first, then per focused panel.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Active while the notification dialog is open
    pub notification: HashMap<KeyCombo, Command>,
    /// Per focused panel
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            notification: HashMap::new(),
            focus: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_notification_bindings();
        config.setup_focus_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        let g = &mut self.global;
        g.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        g.insert(KeyCombo::ctrl(KeyCode::Char('q')), Command::Quit);
        g.insert(
            KeyCombo::plain(KeyCode::F(1)),
            Command::SwitchMode(InputMode::Image),
        );
        g.insert(
            KeyCombo::plain(KeyCode::F(2)),
            Command::SwitchMode(InputMode::Text),
        );
        g.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::AnalyzeImage);
        g.insert(KeyCombo::ctrl(KeyCode::Char('g')), Command::GenerateMore);
        g.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        g.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        g.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
    }

    fn setup_notification_bindings(&mut self) {
        self.notification
            .insert(KeyCombo::plain(KeyCode::Enter), Command::DismissNotification);
        self.notification
            .insert(KeyCombo::plain(KeyCode::Esc), Command::DismissNotification);
    }

    fn setup_focus_bindings(&mut self) {
        // Text fields
        for focus in [Focus::Input, Focus::Chat] {
            let mut bindings = HashMap::new();
            bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
            bindings.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
            bindings.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearInput);
            bindings.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
            bindings.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
            self.focus.insert(focus, bindings);
        }

        // Chip rows and lists
        for focus in [Focus::Dietary, Focus::PopularBreeds, Focus::Recipes] {
            let mut bindings = HashMap::new();
            bindings.insert(KeyCombo::plain(KeyCode::Left), Command::MoveLeft);
            bindings.insert(KeyCombo::plain(KeyCode::Right), Command::MoveRight);
            bindings.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
            bindings.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
            bindings.insert(KeyCombo::plain(KeyCode::Char('h')), Command::MoveLeft);
            bindings.insert(KeyCombo::plain(KeyCode::Char('l')), Command::MoveRight);
            bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
            bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
            bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
            bindings.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Toggle);
            self.focus.insert(focus, bindings);
        }
        if let Some(recipes) = self.focus.get_mut(&Focus::Recipes) {
            recipes.insert(KeyCombo::plain(KeyCode::Char('g')), Command::GenerateMore);
        }
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_notification(&self, combo: &KeyCombo) -> Option<&Command> {
        self.notification.get(combo)
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }
}
