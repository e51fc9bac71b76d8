/// Ephemeral references to uploaded image bytes
///
/// An [`ObjectUrl`] is the in-process equivalent of a browser object URL:
/// a name (`blob:gallery/<uuid>`) plus a displayable image handle that stays
/// valid for as long as the owner keeps it. The [`BlobRegistry`] tracks every
/// live reference, and dropping an `ObjectUrl` revokes its entry.
use iced::widget::image::Handle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;
use uuid::Uuid;

const URL_PREFIX: &str = "blob:gallery/";

type Entries = HashMap<Uuid, usize>;

/// Tracks live object URLs and the bytes they keep alive
#[derive(Debug, Default)]
pub struct BlobRegistry {
    entries: Rc<RefCell<Entries>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh object URL for `bytes`
    pub fn create_object_url(&self, bytes: Vec<u8>) -> ObjectUrl {
        let id = Uuid::new_v4();
        let byte_len = bytes.len();

        self.entries.borrow_mut().insert(id, byte_len);
        debug!(%id, byte_len, "minted object url");

        ObjectUrl {
            id,
            url: format!("{URL_PREFIX}{id}"),
            byte_len,
            handle: Handle::from_bytes(bytes),
            registry: Rc::downgrade(&self.entries),
        }
    }

    /// Whether `url` still refers to a live blob
    #[cfg(test)]
    pub fn is_live(&self, url: &str) -> bool {
        url.strip_prefix(URL_PREFIX)
            .and_then(|id| Uuid::parse_str(id).ok())
            .is_some_and(|id| self.entries.borrow().contains_key(&id))
    }

    /// Number of object URLs not yet revoked
    pub fn live_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Total bytes held by live object URLs
    pub fn live_bytes(&self) -> usize {
        self.entries.borrow().values().sum()
    }
}

/// An owned, revocable reference to image bytes.
///
/// Not `Clone`: exactly one owner exists, and its drop revokes the URL.
pub struct ObjectUrl {
    id: Uuid,
    url: String,
    byte_len: usize,
    handle: Handle,
    registry: Weak<RefCell<Entries>>,
}

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Image handle used by the renderer
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Some(entries) = self.registry.upgrade() {
            entries.borrow_mut().remove(&self.id);
            debug!(url = %self.url, "revoked object url");
        }
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectUrl")
            .field("url", &self.url)
            .field("byte_len", &self.byte_len)
            .finish()
    }
}
