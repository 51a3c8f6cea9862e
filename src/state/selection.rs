//! Selection state store.
//!
//! Holds the input mode, picked image, dietary filters and the latest breed
//! and recipe results. Every change goes through a transition method so the
//! whole request lifecycle is testable without a terminal.
//!
//! Requests are identified by a [`RequestTicket`]. A mode switch bumps the
//! generation, so a reply that arrives after the reset no longer matches and
//! is dropped.

use crate::error::ValidationError;
use crate::models::{BreedResult, DietarySelection, ImageUpload, RecipeCard};

/// Which input panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Image,
    Text,
}

impl InputMode {
    pub fn title(&self) -> &'static str {
        match self {
            InputMode::Image => "Upload Image",
            InputMode::Text => "Search by Breed",
        }
    }
}

/// The request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    AnalyzeImage,
    SearchBreed,
    GenerateMore,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::AnalyzeImage => "Analyzing...",
            RequestKind::SearchBreed => "Analyzing...",
            RequestKind::GenerateMore => "Generating recipes...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No result yet
    #[default]
    Idle,
    /// One request in flight
    Loading(RequestKind),
    /// A breed result is displayed
    Ready,
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub kind: RequestKind,
}

/// What happened to a reply handed to an `apply_*` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The reply updated the state
    Updated,
    /// The reply belonged to a superseded request and was dropped
    Stale,
}

/// Snapshot of the selection state.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    mode: InputMode,
    load: LoadState,
    image: Option<ImageUpload>,
    dietary: DietarySelection,
    breed_result: Option<BreedResult>,
    recipes: Vec<RecipeCard>,
    chat_visible: bool,
    chat_session: u64,
    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading(_))
    }

    pub fn loading_kind(&self) -> Option<RequestKind> {
        match self.load {
            LoadState::Loading(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn dietary(&self) -> &DietarySelection {
        &self.dietary
    }

    pub fn breed_result(&self) -> Option<&BreedResult> {
        self.breed_result.as_ref()
    }

    pub fn recipes(&self) -> &[RecipeCard] {
        &self.recipes
    }

    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// Identifier of the current chat conversation. Changes whenever the
    /// breed context is replaced or reset.
    pub fn chat_session(&self) -> u64 {
        self.chat_session
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The analyze action is offered only for a fresh, idle image selection.
    pub fn analyze_offered(&self) -> bool {
        self.mode == InputMode::Image
            && self.image.is_some()
            && !self.is_loading()
            && self.breed_result.is_none()
    }

    // ------------------------------------------------------------------
    // Input transitions
    // ------------------------------------------------------------------

    /// Hard reset into `mode`, also when `mode` is already active.
    ///
    /// Dietary filters survive; everything derived from the previous input
    /// does not.
    pub fn switch_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.load = LoadState::Idle;
        self.image = None;
        self.breed_result = None;
        self.recipes.clear();
        self.chat_visible = false;
        self.chat_session += 1;
        self.generation += 1;
        tracing::info!(?mode, generation = self.generation, "input mode reset");
    }

    /// Hold a picked image. Analysis is a separate action.
    ///
    /// Refused while a request is in flight, so a result always belongs to
    /// the image shown next to it. Returns whether the image was taken.
    pub fn select_image(&mut self, image: ImageUpload) -> bool {
        if self.is_loading() {
            return false;
        }
        self.image = Some(image);
        true
    }

    /// Toggle a dietary filter; returns whether it is selected afterwards.
    pub fn toggle_dietary(&mut self, option: &str) -> bool {
        self.dietary.toggle(option)
    }

    // ------------------------------------------------------------------
    // Request lifecycle
    // ------------------------------------------------------------------

    /// Start image analysis. `Ok(None)` while another request is in flight.
    pub fn begin_image_analysis(&mut self) -> Result<Option<RequestTicket>, ValidationError> {
        if self.is_loading() {
            return Ok(None);
        }
        if self.image.is_none() {
            return Err(ValidationError::NoImageSelected);
        }
        Ok(Some(self.begin(RequestKind::AnalyzeImage)))
    }

    /// Start a breed search. Returns the trimmed breed name with the ticket.
    pub fn begin_breed_search(
        &mut self,
        text: &str,
    ) -> Result<Option<(RequestTicket, String)>, ValidationError> {
        if self.is_loading() {
            return Ok(None);
        }
        let breed = text.trim();
        if breed.is_empty() {
            return Err(ValidationError::EmptyBreedName);
        }
        Ok(Some((self.begin(RequestKind::SearchBreed), breed.to_string())))
    }

    /// Start recipe regeneration for the current breed. Returns the breed name
    /// with the ticket.
    pub fn begin_generate_more(
        &mut self,
    ) -> Result<Option<(RequestTicket, String)>, ValidationError> {
        if self.is_loading() {
            return Ok(None);
        }
        let breed = match &self.breed_result {
            Some(result) => result.breed.clone(),
            None => return Err(ValidationError::NoBreedResult),
        };
        Ok(Some((self.begin(RequestKind::GenerateMore), breed)))
    }

    fn begin(&mut self, kind: RequestKind) -> RequestTicket {
        self.load = LoadState::Loading(kind);
        tracing::debug!(?kind, generation = self.generation, "request started");
        RequestTicket {
            generation: self.generation,
            kind,
        }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation && self.load == LoadState::Loading(ticket.kind)
    }

    fn settled_state(&self) -> LoadState {
        if self.breed_result.is_some() {
            LoadState::Ready
        } else {
            LoadState::Idle
        }
    }

    /// Apply the candidates returned for an image. Only the first is used.
    ///
    /// An empty list ends the request with [`ValidationError::NoCandidates`]
    /// and leaves the displayed results untouched.
    pub fn apply_image_results(
        &mut self,
        ticket: RequestTicket,
        results: Vec<BreedResult>,
    ) -> Result<Applied, ValidationError> {
        if !self.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        match results.into_iter().next() {
            Some(first) => {
                self.set_breed_result(first);
                Ok(Applied::Updated)
            }
            None => {
                self.load = self.settled_state();
                Err(ValidationError::NoCandidates)
            }
        }
    }

    /// Apply the result of a breed search.
    pub fn apply_breed_result(&mut self, ticket: RequestTicket, result: BreedResult) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.set_breed_result(result);
        Applied::Updated
    }

    /// Replace the recipe list wholesale.
    pub fn apply_recipes(&mut self, ticket: RequestTicket, recipes: Vec<RecipeCard>) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        tracing::info!(count = recipes.len(), "recipes replaced");
        self.recipes = recipes;
        self.load = self.settled_state();
        Applied::Updated
    }

    /// End a failed request without touching the displayed results.
    pub fn fail_request(&mut self, ticket: RequestTicket) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.load = self.settled_state();
        Applied::Updated
    }

    fn set_breed_result(&mut self, result: BreedResult) {
        tracing::info!(breed = %result.breed, recipes = result.recipes.len(), "breed result set");
        self.recipes = result.recipes.clone();
        self.breed_result = Some(result);
        self.chat_visible = true;
        self.chat_session += 1;
        self.load = LoadState::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionInfo;

    fn recipe(title: &str) -> RecipeCard {
        RecipeCard {
            title: title.to_string(),
            tags: vec!["Low-Fat".to_string()],
            ingredients: "Chicken".to_string(),
            instructions: "Cook".to_string(),
            nutrition: NutritionInfo::default(),
        }
    }

    fn breed(name: &str, recipes: &[&str]) -> BreedResult {
        BreedResult {
            breed: name.to_string(),
            species: "dog".to_string(),
            confidence: 0.9,
            recipes: recipes.iter().map(|t| recipe(t)).collect(),
        }
    }

    fn image() -> ImageUpload {
        ImageUpload::from_bytes("rex.jpg", b"jpg".to_vec())
    }

    fn ready_with(name: &str, recipes: &[&str]) -> SelectionState {
        let mut state = SelectionState::new();
        state.switch_mode(InputMode::Text);
        let (ticket, _) = state.begin_breed_search(name).unwrap().unwrap();
        state.apply_breed_result(ticket, breed(name, recipes));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.mode(), InputMode::Image);
        assert_eq!(state.load_state(), LoadState::Idle);
        assert!(state.breed_result().is_none());
        assert!(!state.chat_visible());
    }

    #[test]
    fn test_switch_mode_is_hard_reset() {
        let mut state = ready_with("Poodle", &["A", "B"]);
        state.select_image(image());
        state.toggle_dietary("Raw");

        for mode in [InputMode::Image, InputMode::Image, InputMode::Text] {
            state.switch_mode(mode);
            assert_eq!(state.mode(), mode);
            assert!(state.breed_result().is_none());
            assert!(state.recipes().is_empty());
            assert!(state.image().is_none());
            assert!(!state.chat_visible());
            assert_eq!(state.load_state(), LoadState::Idle);
        }
        assert!(state.dietary().contains("Raw"));
    }

    #[test]
    fn test_switch_mode_while_loading_drops_late_reply() {
        let mut state = SelectionState::new();
        state.switch_mode(InputMode::Text);
        let (ticket, _) = state.begin_breed_search("Beagle").unwrap().unwrap();

        state.switch_mode(InputMode::Image);
        assert_eq!(
            state.apply_breed_result(ticket, breed("Beagle", &["A"])),
            Applied::Stale
        );
        assert!(state.breed_result().is_none());
        assert_eq!(state.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_begin_image_analysis_requires_image() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.begin_image_analysis(),
            Err(ValidationError::NoImageSelected)
        );
        assert_eq!(state.load_state(), LoadState::Idle);

        state.select_image(image());
        let ticket = state.begin_image_analysis().unwrap().unwrap();
        assert_eq!(ticket.kind, RequestKind::AnalyzeImage);
        assert_eq!(
            state.load_state(),
            LoadState::Loading(RequestKind::AnalyzeImage)
        );
    }

    #[test]
    fn test_triggers_are_noops_while_loading() {
        let mut state = ready_with("Poodle", &["A"]);
        state.begin_generate_more().unwrap().unwrap();

        assert_eq!(state.begin_generate_more(), Ok(None));
        assert_eq!(state.begin_breed_search("Beagle"), Ok(None));
        assert_eq!(state.begin_image_analysis(), Ok(None));
        assert_eq!(
            state.load_state(),
            LoadState::Loading(RequestKind::GenerateMore)
        );
    }

    #[test]
    fn test_image_pick_refused_while_analyzing() {
        let mut state = SelectionState::new();
        assert!(state.select_image(image()));
        state.begin_image_analysis().unwrap().unwrap();

        let other = ImageUpload::from_bytes("bella.png", b"png".to_vec());
        assert!(!state.select_image(other));
        assert_eq!(state.image().unwrap().file_name, "rex.jpg");
    }

    #[test]
    fn test_begin_breed_search_trims_and_validates() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.begin_breed_search("   "),
            Err(ValidationError::EmptyBreedName)
        );
        let (_, breed) = state.begin_breed_search("  Labrador Retriever ").unwrap().unwrap();
        assert_eq!(breed, "Labrador Retriever");
    }

    #[test]
    fn test_image_success_uses_first_candidate_only() {
        let mut state = ready_with("Poodle", &["Old"]);
        state.switch_mode(InputMode::Image);
        state.select_image(image());
        let ticket = state.begin_image_analysis().unwrap().unwrap();

        let applied = state
            .apply_image_results(
                ticket,
                vec![breed("Husky", &["H1", "H2"]), breed("Malamute", &["M1"])],
            )
            .unwrap();

        assert_eq!(applied, Applied::Updated);
        assert_eq!(state.breed_result().unwrap().breed, "Husky");
        let titles: Vec<_> = state.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["H1", "H2"]);
        assert!(state.chat_visible());
        assert_eq!(state.load_state(), LoadState::Ready);
        assert!(!state.analyze_offered());
    }

    #[test]
    fn test_image_empty_candidates_is_validation_error() {
        let mut state = SelectionState::new();
        state.select_image(image());
        let ticket = state.begin_image_analysis().unwrap().unwrap();

        assert_eq!(
            state.apply_image_results(ticket, Vec::new()),
            Err(ValidationError::NoCandidates)
        );
        assert!(state.breed_result().is_none());
        assert_eq!(state.load_state(), LoadState::Idle);
        assert!(state.analyze_offered());
    }

    #[test]
    fn test_generate_more_requires_breed_result() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.begin_generate_more(),
            Err(ValidationError::NoBreedResult)
        );
    }

    #[test]
    fn test_generate_more_replaces_recipes() {
        let mut state = ready_with("Poodle", &["A", "B"]);
        let session = state.chat_session();
        let (ticket, breed_name) = state.begin_generate_more().unwrap().unwrap();
        assert_eq!(breed_name, "Poodle");

        state.apply_recipes(ticket, vec![recipe("X"), recipe("Y"), recipe("Z")]);

        let titles: Vec<_> = state.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["X", "Y", "Z"]);
        assert!(state.chat_visible());
        assert_eq!(state.chat_session(), session);
        assert_eq!(state.load_state(), LoadState::Ready);
    }

    #[test]
    fn test_failed_generate_more_keeps_recipes() {
        let mut state = ready_with("Poodle", &["A", "B"]);
        let (ticket, _) = state.begin_generate_more().unwrap().unwrap();

        assert_eq!(state.fail_request(ticket), Applied::Updated);

        let titles: Vec<_> = state.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(state.breed_result().unwrap().breed, "Poodle");
        assert_eq!(state.load_state(), LoadState::Ready);
    }

    #[test]
    fn test_failed_first_search_returns_to_idle() {
        let mut state = SelectionState::new();
        let (ticket, _) = state.begin_breed_search("Beagle").unwrap().unwrap();
        state.fail_request(ticket);
        assert_eq!(state.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_new_breed_starts_new_chat_session() {
        let mut state = ready_with("Poodle", &[]);
        let first = state.chat_session();
        let (ticket, _) = state.begin_breed_search("Beagle").unwrap().unwrap();
        state.apply_breed_result(ticket, breed("Beagle", &[]));
        assert_ne!(state.chat_session(), first);
    }

    #[test]
    fn test_stale_ticket_kind_is_dropped() {
        let mut state = ready_with("Poodle", &["A"]);
        let (ticket, _) = state.begin_generate_more().unwrap().unwrap();
        let wrong = RequestTicket {
            kind: RequestKind::SearchBreed,
            ..ticket
        };
        assert_eq!(state.fail_request(wrong), Applied::Stale);
        assert!(state.is_loading());
    }
}
