//! Data model shared between the API client, the state store and the UI.

mod breed;
mod chat;
mod dietary;
mod image;
mod recipe;

pub use breed::{BreedResult, PopularBreed, PopularBreeds};
pub use chat::{ChatMessage, ChatRole, ChatbotRequest, ChatbotResponse};
pub use dietary::DietarySelection;
pub use image::{expand_home, guess_mime_type, ImageUpload, MAX_IMAGE_SIZE};
pub use recipe::{format_magnitude, NutrientFigure, NutritionInfo, RecipeCard};
