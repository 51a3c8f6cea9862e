use bytes::Bytes;
use std::path::{Path, PathBuf};

use crate::error::{PetPalResult, ValidationError};

/// Largest image accepted for upload (10 MiB).
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// A dog photo picked by the user, held in memory until analysis is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Build an upload from bytes already in memory.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        Self {
            path: PathBuf::from(&file_name),
            mime_type: guess_mime_type(Path::new(&file_name)),
            file_name,
            bytes: bytes.into(),
        }
    }

    /// Read an image from disk, enforcing the size limits.
    pub async fn load(path: impl AsRef<Path>) -> PetPalResult<Self> {
        let path = path.as_ref().to_path_buf();

        let metadata = tokio::fs::metadata(&path).await.map_err(|e| {
            ValidationError::ImageUnreadable {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        if !metadata.is_file() {
            return Err(ValidationError::ImageUnreadable {
                path,
                message: "not a regular file".to_string(),
            }
            .into());
        }
        if metadata.len() > MAX_IMAGE_SIZE {
            return Err(ValidationError::ImageTooLarge {
                path,
                size: metadata.len(),
                limit: MAX_IMAGE_SIZE,
            }
            .into());
        }

        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| ValidationError::ImageUnreadable {
                path: path.clone(),
                message: e.to_string(),
            })?;
        if data.is_empty() {
            return Err(ValidationError::ImageEmpty { path }.into());
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            mime_type: guess_mime_type(&path),
            file_name,
            path,
            bytes: Bytes::from(data),
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// MIME type from the file extension; unknown extensions upload as raw bytes.
pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Expand a leading `~` to the home directory. Other paths pass through.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PetPalError;
    use std::io::Write;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("rex.JPG")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("rex.png")), "image/png");
        assert_eq!(guess_mime_type(Path::new("rex.webp")), "image/webp");
        assert_eq!(guess_mime_type(Path::new("rex.tiff")), "image/tiff");
        assert_eq!(guess_mime_type(Path::new("rex")), "application/octet-stream");
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~/dogs/rex.jpg"), home.join("dogs/rex.jpg"));
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("/tmp/rex.jpg"), PathBuf::from("/tmp/rex.jpg"));
        assert_eq!(expand_home("~rex/a.jpg"), PathBuf::from("~rex/a.jpg"));
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let upload = ImageUpload::load(file.path()).await.unwrap();
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, Bytes::from_static(b"\x89PNG fake"));
        assert!(upload.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_load_rejects_empty_file() {
        let file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        let err = ImageUpload::load(file.path()).await.unwrap_err();
        assert!(matches!(
            err,
            PetPalError::Validation(ValidationError::ImageEmpty { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = ImageUpload::load("/definitely/not/here.jpg").await.unwrap_err();
        assert!(matches!(
            err,
            PetPalError::Validation(ValidationError::ImageUnreadable { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageUpload::load(dir.path()).await.unwrap_err();
        assert!(matches!(
            err,
            PetPalError::Validation(ValidationError::ImageUnreadable { .. })
        ));
    }

    #[test]
    fn test_from_bytes() {
        let upload = ImageUpload::from_bytes("dog.jpeg", vec![1u8, 2, 3]);
        assert_eq!(upload.mime_type, "image/jpeg");
        assert_eq!(upload.size(), 3);
    }
}
