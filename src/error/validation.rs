//! Errors raised before any request is sent, when the current state cannot
//! satisfy the user's action.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Analyze was requested without a selected image.
    NoImageSelected,

    /// Breed search was submitted with blank text.
    EmptyBreedName,

    /// Recipe generation needs a breed result first.
    NoBreedResult,

    /// The image endpoint answered with an empty candidate list.
    NoCandidates,

    /// The picked image could not be read.
    ImageUnreadable { path: PathBuf, message: String },

    /// The picked image file is empty.
    ImageEmpty { path: PathBuf },

    /// The picked image exceeds the upload limit.
    ImageTooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NoImageSelected => "E_VAL_NO_IMAGE",
            ValidationError::EmptyBreedName => "E_VAL_EMPTY_BREED",
            ValidationError::NoBreedResult => "E_VAL_NO_BREED",
            ValidationError::NoCandidates => "E_VAL_NO_CANDIDATES",
            ValidationError::ImageUnreadable { .. } => "E_VAL_IMAGE_READ",
            ValidationError::ImageEmpty { .. } => "E_VAL_IMAGE_EMPTY",
            ValidationError::ImageTooLarge { .. } => "E_VAL_IMAGE_SIZE",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoImageSelected => {
                write!(f, "Please select a dog photo before analyzing.")
            }
            ValidationError::EmptyBreedName => write!(f, "Please enter a breed name."),
            ValidationError::NoBreedResult => {
                write!(f, "Identify a breed before generating recipes.")
            }
            ValidationError::NoCandidates => {
                write!(f, "No breed could be identified in that image.")
            }
            ValidationError::ImageUnreadable { path, message } => {
                write!(f, "Could not read '{}': {}", path.display(), message)
            }
            ValidationError::ImageEmpty { path } => {
                write!(f, "'{}' is empty.", path.display())
            }
            ValidationError::ImageTooLarge { path, size, limit } => write!(
                f,
                "'{}' is {} bytes; the limit is {} bytes.",
                path.display(),
                size,
                limit
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        assert_eq!(
            ValidationError::NoImageSelected.to_string(),
            "Please select a dog photo before analyzing."
        );
        let too_large = ValidationError::ImageTooLarge {
            path: PathBuf::from("big.jpg"),
            size: 20,
            limit: 10,
        };
        assert!(too_large.to_string().contains("big.jpg"));
    }

    #[test]
    fn test_error_codes_unique() {
        let codes = [
            ValidationError::NoImageSelected.error_code(),
            ValidationError::EmptyBreedName.error_code(),
            ValidationError::NoBreedResult.error_code(),
            ValidationError::NoCandidates.error_code(),
        ];
        let mut deduped = codes.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }
}
