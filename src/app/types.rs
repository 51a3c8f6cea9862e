//! Type definitions for the application state.
//!
//! - [`Focus`] - Which panel receives keyboard input
//! - [`Notification`] - Blocking error dialog

use crate::error::{ErrorCategory, PetPalError};
use crate::state::InputMode;

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Dietary filter chips
    Dietary,
    /// Image path or breed name field
    #[default]
    Input,
    /// Popular breed quick-pick list (text mode only)
    PopularBreeds,
    /// Recipe cards
    Recipes,
    /// Chat question field
    Chat,
}

impl Focus {
    /// Focus order for the given context. Panels that are not on screen are
    /// skipped.
    pub fn cycle(
        mode: InputMode,
        has_dietary: bool,
        has_popular: bool,
        has_results: bool,
        chat_visible: bool,
    ) -> Vec<Focus> {
        let mut order = Vec::with_capacity(5);
        if has_dietary {
            order.push(Focus::Dietary);
        }
        order.push(Focus::Input);
        if mode == InputMode::Text && has_popular {
            order.push(Focus::PopularBreeds);
        }
        if has_results {
            order.push(Focus::Recipes);
        }
        if chat_visible {
            order.push(Focus::Chat);
        }
        order
    }

    /// Whether printable keys are text input in this panel.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Focus::Input | Focus::Chat)
    }
}

/// A blocking notification shown over the UI until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub hint: Option<String>,
    pub category: ErrorCategory,
}

impl Notification {
    pub fn from_error(err: &PetPalError) -> Self {
        let category = err.category();
        Self {
            title: category.title().to_string(),
            message: err.user_message(),
            hint: category
                .is_retryable()
                .then(|| category.recovery_hint().to_string()),
            category,
        }
    }
}
