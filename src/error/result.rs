//! Result type alias for PetPal operations.

use super::petpal_error::PetPalError;

/// Type alias for Results using [`PetPalError`].
///
/// ```ignore
/// use petpal::error::PetPalResult;
///
/// async fn load_breed(client: &PetPalClient) -> PetPalResult<BreedResult> {
///     client.predict_breed_from_text("Beagle", &DietarySelection::new()).await
/// }
/// ```
pub type PetPalResult<T> = Result<T, PetPalError>;
