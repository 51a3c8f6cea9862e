//! Client for the remote PetPal inference service.

mod client;

pub use client::{
    PetPalClient, CHATBOT_PATH, DEFAULT_RECIPE_COUNT, DIETARY_OPTIONS_PATH, GENERATE_MORE_PATH,
    GET_RECIPES_PATH, HEALTH_PATH, POPULAR_BREEDS_PATH, PREDICT_IMAGE_PATH, PREDICT_TEXT_PATH,
};
