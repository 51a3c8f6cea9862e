//! Application state and logic for the TUI.
//!
//! [`App`] is the single controller: it owns the [`SelectionState`] and the
//! current [`ChatPanel`], turns commands into spawned API calls, and applies
//! the replies that come back as [`AppMessage`]s.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Notification};

use tokio::sync::mpsc;

use crate::api::PetPalClient;
use crate::models::PopularBreeds;
use crate::startup::StartupStatus;
use crate::state::{ChatPanel, SelectionState};

/// Main application state
pub struct App {
    /// Input mode, image, dietary filters, breed result and recipes
    pub selection: SelectionState,
    /// Conversation for the breed on screen, if any
    pub chat: Option<ChatPanel>,
    /// Inference service client (cheap to clone into tasks)
    pub client: PetPalClient,
    /// Recipes requested per regeneration
    pub recipe_count: u32,
    /// Dietary vocabulary from the service
    pub dietary_options: Vec<String>,
    /// Popular breeds from the service, in display order
    pub popular_breeds: PopularBreeds,
    /// Aggregated startup fetch status
    pub startup: StartupStatus,
    /// Blocking error dialog
    pub notification: Option<Notification>,
    /// Panel receiving keyboard input
    pub focus: Focus,
    /// Image path being typed (image mode)
    pub image_path_input: String,
    /// Breed name being typed (text mode)
    pub breed_input: String,
    /// Chat question being typed
    pub chat_input: String,
    /// Cursor in the dietary chip row
    pub dietary_cursor: usize,
    /// Cursor in the popular breed list
    pub popular_cursor: usize,
    /// Index of the first recipe card on screen
    pub recipe_scroll: usize,
    /// Lines scrolled up from the bottom of the chat
    pub chat_scroll: u16,
    /// True while a picked image is being read from disk
    pub image_loading: bool,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag: set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App for the given client.
    pub fn new(client: PetPalClient, recipe_count: u32) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            selection: SelectionState::new(),
            chat: None,
            client,
            recipe_count,
            dietary_options: Vec::new(),
            popular_breeds: PopularBreeds::new(),
            startup: StartupStatus::connecting(),
            notification: None,
            focus: Focus::default(),
            image_path_input: String::new(),
            breed_input: String::new(),
            chat_input: String::new(),
            dietary_cursor: 0,
            popular_cursor: 0,
            recipe_scroll: 0,
            chat_scroll: 0,
            image_loading: false,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// True while something on screen is animating.
    pub fn is_busy(&self) -> bool {
        self.selection.is_loading()
            || self.image_loading
            || self.chat.as_ref().is_some_and(|c| c.is_pending())
    }

    /// Advance animations. Only dirties the frame when something animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Panels reachable with Tab in the current state.
    pub fn focus_order(&self) -> Vec<Focus> {
        Focus::cycle(
            self.selection.mode(),
            !self.dietary_options.is_empty(),
            !self.popular_breeds.is_empty(),
            self.selection.breed_result().is_some(),
            self.chat.is_some() && self.selection.chat_visible(),
        )
    }

    /// Move focus back to the input field if the focused panel disappeared.
    pub(crate) fn normalize_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Input;
        }
    }
}
