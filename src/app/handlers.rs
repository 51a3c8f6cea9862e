//! Message and command handling for the App.

use tracing::{debug, info, warn};

use crate::input::Command;
use crate::models::expand_home;
use crate::state::{Applied, ChatPanel, InputMode, RequestTicket};

use super::{App, AppMessage, Focus};

impl App {
    /// Apply a reply from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ReferenceDataLoaded(data) => {
                self.startup = data.status();
                if let Some(options) = data.dietary_options.into_loaded() {
                    self.dietary_options = options;
                }
                if let Some(popular) = data.popular_breeds.into_loaded() {
                    self.popular_breeds = popular;
                }
                self.dietary_cursor = 0;
                self.popular_cursor = 0;
            }
            AppMessage::ImageLoaded { generation, result } => {
                if generation != self.selection.generation() {
                    debug!("dropping image read from a previous mode");
                    return;
                }
                self.image_loading = false;
                match result {
                    Ok(image) => {
                        let file = image.file_name.clone();
                        if self.selection.select_image(image) {
                            info!(%file, "image selected");
                            self.image_path_input.clear();
                        } else {
                            debug!(%file, "dropping image picked during a request");
                        }
                    }
                    Err(err) => self.notify_error(err),
                }
            }
            AppMessage::BreedAnalyzed { ticket, result } => match result {
                Ok(candidates) => match self.selection.apply_image_results(ticket, candidates) {
                    Ok(applied) => self.after_breed_result(applied),
                    Err(err) => self.notify_error(err),
                },
                Err(err) => self.fail(ticket, err),
            },
            AppMessage::BreedSearched { ticket, result } => match result {
                Ok(breed) => {
                    let applied = self.selection.apply_breed_result(ticket, breed);
                    self.after_breed_result(applied);
                }
                Err(err) => self.fail(ticket, err),
            },
            AppMessage::RecipesGenerated { ticket, result } => match result {
                Ok(recipes) => {
                    if self.selection.apply_recipes(ticket, recipes) == Applied::Updated {
                        self.recipe_scroll = 0;
                    }
                }
                Err(err) => self.fail(ticket, err),
            },
            AppMessage::ChatAnswered { session, result } => {
                let Some(chat) = self.chat.as_mut().filter(|c| c.session() == session) else {
                    debug!(session, "dropping chat reply for a closed conversation");
                    return;
                };
                match result {
                    Ok(reply) => {
                        chat.apply_answer(reply.answer);
                    }
                    Err(err) => {
                        warn!(code = err.error_code(), "chat request failed: {}", err);
                        chat.apply_failure();
                    }
                }
                self.chat_scroll = 0;
            }
        }
    }

    fn after_breed_result(&mut self, applied: Applied) {
        if applied == Applied::Stale {
            debug!("dropping stale breed result");
            return;
        }
        if let Some(result) = self.selection.breed_result() {
            self.chat = Some(ChatPanel::new(
                self.selection.chat_session(),
                result.breed.clone(),
            ));
        }
        self.chat_input.clear();
        self.chat_scroll = 0;
        self.recipe_scroll = 0;
    }

    fn fail(&mut self, ticket: RequestTicket, err: crate::error::PetPalError) {
        match self.selection.fail_request(ticket) {
            Applied::Updated => self.notify_error(err),
            Applied::Stale => debug!(error = %err, "dropping failure of a superseded request"),
        }
    }

    /// Execute a keyboard command.
    pub fn handle_command(&mut self, cmd: Command) {
        if cmd.requires_redraw() {
            self.mark_dirty();
        }
        match cmd {
            Command::Quit => self.should_quit = true,
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::AnalyzeImage => {
                if self.selection.mode() == InputMode::Image {
                    self.analyze_image();
                }
            }
            Command::GenerateMore => self.generate_more(),
            Command::DismissNotification => self.notification = None,
            Command::FocusNext => self.cycle_focus(1),
            Command::FocusPrev => self.cycle_focus(-1),
            Command::MoveLeft => self.move_cursor(-1, false),
            Command::MoveRight => self.move_cursor(1, false),
            Command::MoveUp => self.move_cursor(-1, true),
            Command::MoveDown => self.move_cursor(1, true),
            Command::Activate => self.activate(),
            Command::Toggle => {
                if self.focus == Focus::Dietary {
                    self.toggle_dietary_at_cursor();
                }
            }
            Command::InsertChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
            }
            Command::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
            }
            Command::ClearInput => {
                if let Some(field) = self.focused_field() {
                    field.clear();
                }
            }
            Command::Noop => {}
        }
    }

    /// Insert pasted text into the focused field.
    ///
    /// Line breaks are dropped. A path pasted into the image field loses the
    /// quotes terminals add when a file is dragged in.
    pub fn handle_paste(&mut self, text: &str) {
        if self.notification.is_some() {
            return;
        }
        let is_path = self.focus == Focus::Input && self.selection.mode() == InputMode::Image;
        let Some(field) = self.focused_field() else {
            return;
        };
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let cleaned = if is_path {
            cleaned.trim().trim_matches(|c| c == '\'' || c == '"').to_string()
        } else {
            cleaned
        };
        field.push_str(&cleaned);
        self.mark_dirty();
    }

    /// Hard reset into `mode` and drop everything tied to the old input.
    pub fn switch_mode(&mut self, mode: InputMode) {
        self.selection.switch_mode(mode);
        self.chat = None;
        self.image_loading = false;
        self.image_path_input.clear();
        self.breed_input.clear();
        self.chat_input.clear();
        self.recipe_scroll = 0;
        self.chat_scroll = 0;
        self.focus = Focus::Input;
    }

    fn cycle_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.focus = order[next as usize];
    }

    fn move_cursor(&mut self, delta: isize, vertical: bool) {
        match self.focus {
            Focus::Dietary => {
                self.dietary_cursor = step(self.dietary_cursor, delta, self.dietary_options.len());
            }
            Focus::PopularBreeds => {
                self.popular_cursor = step(self.popular_cursor, delta, self.popular_breeds.len());
            }
            Focus::Recipes => {
                self.recipe_scroll = step(self.recipe_scroll, delta, self.selection.recipes().len());
            }
            Focus::Chat if vertical => {
                self.chat_scroll = if delta < 0 {
                    self.chat_scroll.saturating_add(1)
                } else {
                    self.chat_scroll.saturating_sub(1)
                };
            }
            Focus::Chat => {}
            Focus::Input => {}
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Dietary => self.toggle_dietary_at_cursor(),
            Focus::Input => match self.selection.mode() {
                InputMode::Image => {
                    if self.selection.is_loading() {
                        return;
                    }
                    let path = self.image_path_input.trim();
                    if path.is_empty() {
                        self.analyze_image();
                    } else {
                        let path = expand_home(path);
                        self.load_image(path);
                    }
                }
                InputMode::Text => {
                    let text = self.breed_input.clone();
                    self.search_breed(&text);
                }
            },
            Focus::PopularBreeds => {
                if self.selection.is_loading() {
                    return;
                }
                if let Some(breed) = self.popular_breeds.nth(self.popular_cursor) {
                    let name = breed.name.clone();
                    self.breed_input = name.clone();
                    self.search_breed(&name);
                }
            }
            Focus::Recipes => self.generate_more(),
            Focus::Chat => self.ask_question(),
        }
        self.normalize_focus();
    }

    fn toggle_dietary_at_cursor(&mut self) {
        if let Some(option) = self.dietary_options.get(self.dietary_cursor).cloned() {
            let selected = self.selection.toggle_dietary(&option);
            debug!(%option, selected, "dietary filter toggled");
        }
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Input => match self.selection.mode() {
                InputMode::Image => Some(&mut self.image_path_input),
                InputMode::Text => Some(&mut self.breed_input),
            },
            Focus::Chat => {
                if self.chat.as_ref().is_some_and(|c| c.is_pending()) {
                    None
                } else {
                    Some(&mut self.chat_input)
                }
            }
            _ => None,
        }
    }
}

/// Move an index by `delta` within `0..len`, clamping at both ends.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
