//! AppMessage enum for async communication within the application.

use crate::error::PetPalResult;
use crate::models::{BreedResult, ChatbotResponse, ImageUpload, RecipeCard};
use crate::startup::ReferenceData;
use crate::state::RequestTicket;

/// Messages sent back to the UI loop by spawned tasks.
///
/// Every reply carries the identifier of the request it answers so the
/// handler can drop replies that were superseded in the meantime.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Both startup fetches finished
    ReferenceDataLoaded(ReferenceData),
    /// A picked image file was read from disk
    ImageLoaded {
        generation: u64,
        result: PetPalResult<ImageUpload>,
    },
    /// Reply to an image analysis
    BreedAnalyzed {
        ticket: RequestTicket,
        result: PetPalResult<Vec<BreedResult>>,
    },
    /// Reply to a breed text search
    BreedSearched {
        ticket: RequestTicket,
        result: PetPalResult<BreedResult>,
    },
    /// Reply to a recipe regeneration
    RecipesGenerated {
        ticket: RequestTicket,
        result: PetPalResult<Vec<RecipeCard>>,
    },
    /// Reply to a chat question
    ChatAnswered {
        session: u64,
        result: PetPalResult<ChatbotResponse>,
    },
}
