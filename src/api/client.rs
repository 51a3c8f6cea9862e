//! PetPal inference service client.
//!
//! One async method per remote capability. Transport goes through
//! [`HttpClient`] so tests can swap in a recording mock.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{NetworkError, PetPalResult, ServerError};
use crate::models::{
    BreedResult, ChatbotRequest, ChatbotResponse, DietarySelection, ImageUpload, PopularBreeds,
    RecipeCard,
};
use crate::traits::{HttpClient, MultipartForm, RequestBody, Response};

/// Recipes requested per "generate more" call unless configured otherwise.
pub const DEFAULT_RECIPE_COUNT: u32 = 3;

pub const PREDICT_IMAGE_PATH: &str = "/predict_dog_breed_image";
pub const PREDICT_TEXT_PATH: &str = "/predict_dog_breed_text";
pub const GENERATE_MORE_PATH: &str = "/generate_more_recipes";
pub const GET_RECIPES_PATH: &str = "/get_recipes";
pub const CHATBOT_PATH: &str = "/chatbot";
pub const DIETARY_OPTIONS_PATH: &str = "/dietary_options";
pub const POPULAR_BREEDS_PATH: &str = "/popular_breeds";
pub const HEALTH_PATH: &str = "/health";

const DIETARY_FIELD: &str = "dietary_options";

/// Client for the PetPal inference service.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct PetPalClient {
    /// Base URL without trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PetPalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetPalClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PetPalClient {
    /// Create a client backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client with an injected transport.
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a photo. The service may return several candidates, best first.
    pub async fn predict_breed_from_image(
        &self,
        image: &ImageUpload,
        dietary: &DietarySelection,
    ) -> PetPalResult<Vec<BreedResult>> {
        let mut form = MultipartForm::new().file(
            "file",
            image.file_name.clone(),
            image.mime_type.clone(),
            image.bytes.clone(),
        );
        if let Some(options) = dietary.as_param() {
            form = form.text(DIETARY_FIELD, options);
        }
        self.post_json(PREDICT_IMAGE_PATH, RequestBody::Multipart(form))
            .await
    }

    /// Look up a breed by name. The text is sent as typed.
    pub async fn predict_breed_from_text(
        &self,
        breed: &str,
        dietary: &DietarySelection,
    ) -> PetPalResult<BreedResult> {
        let body = RequestBody::Form(breed_form(breed, dietary, None));
        self.post_json(PREDICT_TEXT_PATH, body).await
    }

    /// Ask for a fresh batch of recipes for a breed.
    pub async fn generate_more_recipes(
        &self,
        breed: &str,
        dietary: &DietarySelection,
        count: u32,
    ) -> PetPalResult<Vec<RecipeCard>> {
        let body = RequestBody::Form(breed_form(breed, dietary, Some(count)));
        self.post_json(GENERATE_MORE_PATH, body).await
    }

    /// Same contract as [`Self::generate_more_recipes`] on the `/get_recipes`
    /// endpoint. Not used by the UI.
    pub async fn get_recipes(
        &self,
        breed: &str,
        dietary: &DietarySelection,
        count: u32,
    ) -> PetPalResult<Vec<RecipeCard>> {
        let body = RequestBody::Form(breed_form(breed, dietary, Some(count)));
        self.post_json(GET_RECIPES_PATH, body).await
    }

    /// Ask a breed-specific question. No history is sent.
    pub async fn ask_chatbot(&self, breed: &str, question: &str) -> PetPalResult<ChatbotResponse> {
        let request = ChatbotRequest {
            breed: breed.to_string(),
            question: question.to_string(),
        };
        let value = serde_json::to_value(&request).map_err(|e| NetworkError::Other {
            message: e.to_string(),
        })?;
        self.post_json(CHATBOT_PATH, RequestBody::Json(value)).await
    }

    /// Vocabulary for the dietary picker.
    pub async fn get_dietary_options(&self) -> PetPalResult<Vec<String>> {
        self.get_json(DIETARY_OPTIONS_PATH).await
    }

    /// Popular breeds in display order.
    pub async fn get_popular_breeds(&self) -> PetPalResult<PopularBreeds> {
        self.get_json(POPULAR_BREEDS_PATH).await
    }

    /// Liveness probe. The payload shape is not interpreted.
    pub async fn health_check(&self) -> PetPalResult<serde_json::Value> {
        self.get_json(HEALTH_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> PetPalResult<T> {
        let url = self.url(path);
        tracing::debug!(endpoint = path, "GET");
        let result = self.http.get(&url).await;
        self.decode(path, &url, result)
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> PetPalResult<T> {
        let url = self.url(path);
        tracing::debug!(endpoint = path, "POST");
        let result = self.http.post(&url, body).await;
        self.decode(path, &url, result)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        url: &str,
        result: Result<Response, crate::traits::HttpError>,
    ) -> PetPalResult<T> {
        let response = result.map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "request failed");
            NetworkError::from_http(e, url)
        })?;

        if !response.is_success() {
            let err = ServerError::from_body(response.status, &response.body);
            tracing::warn!(endpoint = path, status = response.status, error = %err, "service returned an error");
            return Err(err.into());
        }

        response.json::<T>().map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "could not decode response");
            NetworkError::InvalidResponse {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Form fields shared by the breed-text and recipe endpoints.
///
/// `dietary_options` is omitted entirely when nothing is selected.
fn breed_form(breed: &str, dietary: &DietarySelection, count: Option<u32>) -> Vec<(String, String)> {
    let mut fields = vec![("breed".to_string(), breed.to_string())];
    if let Some(options) = dietary.as_param() {
        fields.push((DIETARY_FIELD.to_string(), options));
    }
    if let Some(count) = count {
        fields.push(("count".to_string(), count.to_string()));
    }
    fields
}
