//! localStorage backend for the shared-file list.

use filedeck_core::shared::STORAGE_KEY;
use filedeck_core::{RecordStorage, SharedFileStore, StoreError};

use super::dom;
use crate::config::raw_url_template;

/// [`RecordStorage`] over `window.localStorage`.
///
/// The storage handle is looked up on every call, so the type itself holds
/// no JS objects.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl RecordStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let storage = dom::local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(self.key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn save(&mut self, json: &str) -> Result<(), StoreError> {
        let storage = dom::local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(self.key, json)
            .map_err(|e| {
                StoreError::WriteFailed(e.as_string().unwrap_or_else(|| "setItem failed".into()))
            })
    }
}

/// Open the shared-file list stored in this browser.
pub fn open_shared_files() -> Result<SharedFileStore<BrowserStorage>, StoreError> {
    SharedFileStore::open(BrowserStorage::default(), raw_url_template())
}
