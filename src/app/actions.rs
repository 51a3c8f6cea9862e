//! Request actions for the App.
//!
//! Each action runs the matching state transition, then spawns the API call
//! on the runtime. Replies come back through `message_tx` and are applied in
//! `handlers.rs`.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::PetPalError;
use crate::models::ImageUpload;
use crate::startup::load_reference_data;

use super::{App, AppMessage, Notification};

impl App {
    /// Surface an error as a blocking notification.
    pub fn notify_error(&mut self, err: impl Into<PetPalError>) {
        let err = err.into();
        warn!(
            code = err.error_code(),
            category = err.category().as_str(),
            "{}",
            err
        );
        self.notification = Some(Notification::from_error(&err));
        self.mark_dirty();
    }

    /// Fetch dietary options and popular breeds in the background.
    pub fn start_reference_data_load(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let data = load_reference_data(&client).await;
            let _ = tx.send(AppMessage::ReferenceDataLoaded(data));
        });
    }

    /// Read a picked image from disk. Analysis stays a separate action.
    pub fn load_image(&mut self, path: impl Into<PathBuf>) {
        if self.selection.is_loading() {
            return;
        }
        let path = path.into();
        let generation = self.selection.generation();
        let tx = self.message_tx.clone();
        self.image_loading = true;
        self.mark_dirty();

        debug!(path = %path.display(), "reading image");
        tokio::spawn(async move {
            let result = ImageUpload::load(&path).await;
            let _ = tx.send(AppMessage::ImageLoaded { generation, result });
        });
    }

    /// Analyze the selected image.
    pub fn analyze_image(&mut self) {
        let ticket = match self.selection.begin_image_analysis() {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return,
            Err(err) => return self.notify_error(err),
        };
        let Some(image) = self.selection.image().cloned() else {
            return;
        };
        let dietary = self.selection.dietary().clone();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        self.mark_dirty();

        info!(file = %image.file_name, size = image.size(), "analyzing image");
        tokio::spawn(async move {
            let result = client.predict_breed_from_image(&image, &dietary).await;
            let _ = tx.send(AppMessage::BreedAnalyzed { ticket, result });
        });
    }

    /// Search for a breed by name.
    pub fn search_breed(&mut self, text: &str) {
        let (ticket, breed) = match self.selection.begin_breed_search(text) {
            Ok(Some(started)) => started,
            Ok(None) => return,
            Err(err) => return self.notify_error(err),
        };
        let dietary = self.selection.dietary().clone();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        self.mark_dirty();

        info!(%breed, "searching breed");
        tokio::spawn(async move {
            let result = client.predict_breed_from_text(&breed, &dietary).await;
            let _ = tx.send(AppMessage::BreedSearched { ticket, result });
        });
    }

    /// Regenerate recipes for the breed on screen.
    pub fn generate_more(&mut self) {
        let (ticket, breed) = match self.selection.begin_generate_more() {
            Ok(Some(started)) => started,
            Ok(None) => return,
            Err(err) => return self.notify_error(err),
        };
        let dietary = self.selection.dietary().clone();
        let count = self.recipe_count;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        self.mark_dirty();

        info!(%breed, count, "generating recipes");
        tokio::spawn(async move {
            let result = client.generate_more_recipes(&breed, &dietary, count).await;
            let _ = tx.send(AppMessage::RecipesGenerated { ticket, result });
        });
    }

    /// Send the typed chat question.
    pub fn ask_question(&mut self) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let Some(request) = chat.submit_question(&self.chat_input) else {
            return;
        };
        self.chat_input.clear();
        self.chat_scroll = 0;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        self.mark_dirty();

        debug!(breed = %request.breed, "asking chatbot");
        tokio::spawn(async move {
            let result = client.ask_chatbot(&request.breed, &request.question).await;
            let _ = tx.send(AppMessage::ChatAnswered {
                session: request.session,
                result,
            });
        });
    }
}
