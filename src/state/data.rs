/// Shared data structures for the gallery state
///
/// These types flow between the gallery controller and the UI layer.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::media::blob::ObjectUrl;

/// Opaque identifier of an image record, unique within a gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn new() -> Self {
        ImageId(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How visible items are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Items stacked one per row
    #[default]
    Column,
    /// Items flow left to right and wrap
    Grid,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 2] = [LayoutMode::Column, LayoutMode::Grid];

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Column => "Column",
            LayoutMode::Grid => "Grid",
        }
    }
}

/// A single uploaded image.
///
/// Records are never mutated after creation. The gallery only appends and
/// removes them, so every field is private behind a read-only accessor.
/// Dropping a record drops its [`ObjectUrl`], which releases the image bytes.
#[derive(Debug)]
pub struct ImageRecord {
    id: ImageId,
    name: String,
    url: ObjectUrl,
    upload_date: DateTime<Utc>,
    /// Original file name (e.g., "IMG_0001.png")
    file_name: String,
    /// Pixel dimensions probed at upload time
    dimensions: (u32, u32),
}

impl ImageRecord {
    pub(crate) fn new(
        name: String,
        url: ObjectUrl,
        file_name: String,
        dimensions: (u32, u32),
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ImageId::new(),
            name,
            url,
            upload_date,
            file_name,
            dimensions,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &ObjectUrl {
        &self.url
    }

    pub fn upload_date(&self) -> DateTime<Utc> {
        self.upload_date
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn byte_len(&self) -> usize {
        self.url.byte_len()
    }
}
