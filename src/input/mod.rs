//! Keyboard input: commands, default keybindings and dispatch.

pub mod command;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::{CommandRegistry, InputContext};
