/// Error types for the gallery
///
/// Every variant is `Clone` so errors can travel inside iced messages
/// produced by background tasks.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Submit was attempted without a file or without a name
    #[error("Fields cannot be empty")]
    EmptyFields,

    /// The selected file could not be read
    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The selected file is not an image we can decode
    #[error("{} is not a supported image: {message}", path.display())]
    UnsupportedImage { path: PathBuf, message: String },

    /// The settings file exists but could not be used
    #[error("Invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },
}

impl GalleryError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        GalleryError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_message_matches_the_form_alert() {
        assert_eq!(GalleryError::EmptyFields.to_string(), "Fields cannot be empty");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = GalleryError::io(
            "/tmp/missing.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.png"));
        assert!(msg.contains("no such file"));
    }
}
