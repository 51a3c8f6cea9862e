//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum represents user actions, decoupling key bindings from
//! their effects.

use crate::state::InputMode;

/// Represents all commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, Ctrl+Q)
    Quit,
    /// Hard reset into an input mode (F1 / F2)
    SwitchMode(InputMode),
    /// Analyze the selected image (Ctrl+A)
    AnalyzeImage,
    /// Regenerate recipes for the current breed (Ctrl+G)
    GenerateMore,
    /// Close the notification dialog (Enter, Esc)
    DismissNotification,

    // =========================================================================
    // Focus Navigation
    // =========================================================================
    /// Next panel (Tab)
    FocusNext,
    /// Previous panel (Shift+Tab)
    FocusPrev,
    /// Move the cursor/selection within the focused panel
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // =========================================================================
    // Panel Actions
    // =========================================================================
    /// Context action of the focused panel (Enter): submit a field, pick a
    /// popular breed, toggle a dietary chip
    Activate,
    /// Toggle the dietary chip under the cursor (Space)
    Toggle,

    // =========================================================================
    // Text Editing
    // =========================================================================
    InsertChar(char),
    Backspace,
    /// Clear the focused field (Ctrl+U)
    ClearInput,

    /// Key consumed with no effect
    Noop,
}

impl Command {
    /// Returns true if this command changes visible state.
    pub fn requires_redraw(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
