use chrono::Utc;
use tracing::{debug, info, warn};

use super::data::{ImageId, ImageRecord, LayoutMode};
use super::prompt::Prompt;
use super::view::{page_range, total_pages};
use crate::error::{GalleryError, Result};
use crate::media::blob::BlobRegistry;
use crate::media::loader::PendingFile;

/// Question asked before a record is removed
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this image?";

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed; carries its name
    Deleted(String),
    /// The user declined the confirmation
    Declined,
    /// No record has this id
    NotFound,
}

/// The Gallery owns every image record and the view settings around them.
///
/// It is the only thing that mutates gallery state. Each command finishes
/// with a page reflow so the current page is never left empty while an
/// earlier page exists.
pub struct Gallery {
    records: Vec<ImageRecord>,
    blobs: BlobRegistry,
    pending_name: String,
    pending_file: Option<PendingFile>,
    layout: LayoutMode,
    search_term: String,
    current_page: usize,
    page_size: usize,
}

impl Gallery {
    /// Create an empty gallery on page 1.
    ///
    /// A zero `page_size` is bumped to 1.
    pub fn new(page_size: usize, layout: LayoutMode) -> Self {
        Self {
            records: Vec::new(),
            blobs: BlobRegistry::new(),
            pending_name: String::new(),
            pending_file: None,
            layout,
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    #[cfg(test)]
    pub fn blobs(&self) -> &BlobRegistry {
        &self.blobs
    }

    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }

    pub fn pending_file(&self) -> Option<&PendingFile> {
        self.pending_file.as_ref()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.records.len(), self.page_size)
    }

    /// Records on the current page, before search filtering
    pub fn page_slice(&self) -> &[ImageRecord] {
        &self.records[page_range(self.records.len(), self.current_page, self.page_size)]
    }

    pub fn find(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    // ========== Upload draft ==========

    pub fn select_file(&mut self, file: PendingFile) {
        debug!(file = file.file_name(), "selected upload file");
        self.pending_file = Some(file);
    }

    pub fn set_name(&mut self, name: String) {
        self.pending_name = name;
    }

    /// Turn the draft into a new record appended to the gallery.
    ///
    /// Fails with [`GalleryError::EmptyFields`] without touching any state
    /// when the file or the name is missing.
    pub fn submit(&mut self) -> Result<ImageId> {
        if self.pending_name.is_empty() {
            return Err(GalleryError::EmptyFields);
        }
        let Some(file) = self.pending_file.take() else {
            return Err(GalleryError::EmptyFields);
        };

        let name = std::mem::take(&mut self.pending_name);
        let (file_name, bytes, dimensions) = file.into_parts();
        let url = self.blobs.create_object_url(bytes);
        let record = ImageRecord::new(name, url, file_name, dimensions, Utc::now());
        let id = record.id();

        info!(
            %id,
            name = record.name(),
            file = record.file_name(),
            url = record.url().as_str(),
            "added image"
        );
        self.records.push(record);
        self.reflow();

        Ok(id)
    }

    // ========== Records ==========

    /// Remove the record with `id` once the user confirms.
    ///
    /// Unknown ids are ignored without asking. The removed record's object
    /// URL is revoked when the record drops at the end of this call.
    pub fn delete(&mut self, id: ImageId, prompt: &dyn Prompt) -> DeleteOutcome {
        let Some(index) = self.records.iter().position(|record| record.id() == id) else {
            debug!(%id, "delete requested for unknown image");
            return DeleteOutcome::NotFound;
        };

        if !prompt.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "delete declined");
            return DeleteOutcome::Declined;
        }

        let name = self.records.remove(index).name().to_string();
        info!(
            %id,
            name = %name,
            live_blobs = self.blobs.live_count(),
            live_bytes = self.blobs.live_bytes(),
            "deleted image"
        );
        self.reflow();

        DeleteOutcome::Deleted(name)
    }

    // ========== View settings ==========

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    /// Change the search term. The current page is kept as is.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Jump to `page`; requests outside `1..=total_pages` are ignored
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            warn!(page, total = self.total_pages(), "ignoring out-of-range page");
            return false;
        }
        self.current_page = page;
        true
    }

    /// Change how many records a page holds; zero is ignored
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            warn!("ignoring zero page size");
            return false;
        }
        self.page_size = page_size;
        self.reflow();
        true
    }

    /// Step back while the current page has nothing to show
    fn reflow(&mut self) {
        while self.current_page > 1 && self.page_slice().is_empty() {
            self.current_page -= 1;
            debug!(page = self.current_page, "reflowed to previous page");
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(2, LayoutMode::Column)
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("records", &self.records.len())
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("layout", &self.layout)
            .field("search_term", &self.search_term)
            .finish()
    }
}
