//! Browser-local list of recorded ("shared") files.
//!
//! The list is one JSON array under [`STORAGE_KEY`], read and written
//! wholesale on every change. Recording a file stores a reference only; the
//! file itself must already be in the backing repository.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::remote::RawUrlTemplate;
use crate::search::SearchTerm;

/// Storage key holding the JSON list.
pub const STORAGE_KEY: &str = "sharedFiles";

/// Size shown for recorded files (the size is not known at record time).
pub const UNKNOWN_SIZE: &str = "unknown";

/// A recorded file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFile {
    pub id: u64,
    pub name: String,
    /// Repository-relative path
    pub path: String,
    /// Download URL derived from `path`
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub upload_date: String,
}

/// Form input for a new record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub path: String,
    pub description: String,
}

/// Key/value slot holding the serialized list.
pub trait RecordStorage {
    /// Read the stored JSON, `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored JSON.
    fn save(&mut self, json: &str) -> Result<(), StoreError>;
}

/// In-memory storage, for tests and host tools.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    pub contents: Option<String>,
}

impl RecordStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, json: &str) -> Result<(), StoreError> {
        self.contents = Some(json.to_string());
        Ok(())
    }
}

/// Shared-file list bound to a storage backend.
pub struct SharedFileStore<S: RecordStorage> {
    storage: S,
    template: RawUrlTemplate,
    files: Vec<SharedFile>,
}

impl<S: RecordStorage> SharedFileStore<S> {
    /// Load the list, seeding an example record when it is empty.
    pub fn open(storage: S, template: RawUrlTemplate) -> Result<Self, StoreError> {
        let files = match storage.load()? {
            Some(json) => serde_json::from_str::<Vec<SharedFile>>(&json)?,
            None => Vec::new(),
        };

        let mut store = Self {
            storage,
            template,
            files,
        };

        if store.files.is_empty() {
            let example = store.example_record();
            store.files.push(example);
            store.persist()?;
        }

        Ok(store)
    }

    fn example_record(&self) -> SharedFile {
        let path = "files/example.jpg";
        SharedFile {
            id: 1,
            name: "example.jpg".to_string(),
            path: path.to_string(),
            url: self.template.url_for(path),
            description: "Example image file".to_string(),
            size: "1.2 MB".to_string(),
            upload_date: "2024-01-01".to_string(),
        }
    }

    /// All records in insertion order.
    pub fn files(&self) -> &[SharedFile] {
        &self.files
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a record and write the list back.
    ///
    /// `id` is normally the current time in milliseconds; it is bumped past
    /// the largest existing id if needed so ids stay unique.
    pub fn record(
        &mut self,
        draft: RecordDraft,
        id: u64,
        upload_date: impl Into<String>,
    ) -> Result<&SharedFile, StoreError> {
        let name = draft.name.trim();
        let path = draft.path.trim();
        if name.is_empty() {
            return Err(StoreError::MissingField("name"));
        }
        if path.is_empty() {
            return Err(StoreError::MissingField("path"));
        }

        let id = self.unique_id(id);
        let index = self.files.len();

        self.files.push(SharedFile {
            id,
            name: name.to_string(),
            path: path.to_string(),
            url: self.template.url_for(path),
            description: draft.description.trim().to_string(),
            size: UNKNOWN_SIZE.to_string(),
            upload_date: upload_date.into(),
        });

        if let Err(e) = self.persist() {
            self.files.pop();
            return Err(e);
        }

        Ok(&self.files[index])
    }

    /// `wanted` if it is past every stored id, else the id after the largest.
    /// Falls back to the lowest unused id when the largest is `u64::MAX`.
    fn unique_id(&self, wanted: u64) -> u64 {
        match self.files.iter().map(|f| f.id).max() {
            Some(max) if wanted <= max => max
                .checked_add(1)
                .unwrap_or_else(|| self.lowest_free_id()),
            _ => wanted,
        }
    }

    fn lowest_free_id(&self) -> u64 {
        (0..=u64::MAX)
            .find(|candidate| self.files.iter().all(|f| f.id != *candidate))
            .unwrap_or_default()
    }

    /// Records whose name or description contains `term`.
    pub fn filter(&self, term: &SearchTerm) -> Vec<&SharedFile> {
        self.files
            .iter()
            .filter(|f| term.matches(&f.name, &f.description))
            .collect()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.files)?;
        self.storage.save(&json)
    }
}
