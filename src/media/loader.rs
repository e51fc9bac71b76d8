/// Upload loader
///
/// Reads a picked file off the UI thread and probes it with the `image`
/// crate so that only decodable images make it into the upload draft.
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{GalleryError, Result};

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
];

/// A picked file that has not been submitted yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    path: PathBuf,
    file_name: String,
    bytes: Vec<u8>,
    dimensions: (u32, u32),
}

impl PendingFile {
    /// Build a draft file from bytes already in memory.
    ///
    /// Fails with [`GalleryError::UnsupportedImage`] when the bytes are not
    /// an image format we can decode.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self> {
        let path = path.into();
        let dimensions = probe_dimensions(&bytes).map_err(|message| {
            GalleryError::UnsupportedImage {
                path: path.clone(),
                message,
            }
        })?;

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            path,
            file_name,
            bytes,
            dimensions,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Split into the parts a record keeps
    pub(crate) fn into_parts(self) -> (String, Vec<u8>, (u32, u32)) {
        (self.file_name, self.bytes, self.dimensions)
    }
}

/// Load a picked file as an upload draft
pub async fn load_upload(path: PathBuf) -> Result<PendingFile> {
    let join_path = path.clone();

    // Spawn blocking because decoding the header may touch a large file
    task::spawn_blocking(move || load_upload_blocking(&path))
        .await
        .map_err(|e| GalleryError::Io {
            path: join_path,
            message: format!("Task join error: {}", e),
        })?
}

/// Blocking implementation of upload loading
pub fn load_upload_blocking(path: &Path) -> Result<PendingFile> {
    let bytes = std::fs::read(path).map_err(|e| GalleryError::io(path, e))?;
    PendingFile::from_bytes(path, bytes)
}

/// Read the pixel dimensions without decoding the whole image
fn probe_dimensions(bytes: &[u8]) -> std::result::Result<(u32, u32), String> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
