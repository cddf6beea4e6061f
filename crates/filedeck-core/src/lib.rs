//! Browser-independent logic for the filedeck file browser.
//!
//! This crate provides:
//! - [`Catalog`] - the static folder/file tree and path lookup
//! - [`Navigator`] - current path + search term, rendered into a [`DirectoryView`]
//! - [`breadcrumb`] - path-prefix trail for the current location
//! - [`PreviewKind`] - preview dispatch by file extension
//! - [`RawUrlTemplate`] - download URL construction
//! - [`SharedFileStore`] - the browser-local list of recorded files
//!
//! Nothing in here touches the DOM, so everything is testable on the host.

pub mod breadcrumb;
pub mod catalog;
pub mod error;
pub mod icons;
pub mod navigator;
pub mod path;
pub mod preview;
pub mod remote;
pub mod search;
pub mod shared;

pub use breadcrumb::{Crumb, breadcrumb};
pub use catalog::{Catalog, CatalogEntry, Directory, FileInfo, FlatCatalog, Folder, FolderInfo};
pub use error::{CatalogError, CatalogIssue, StoreError};
pub use icons::icon_for_name;
pub use navigator::{DirStats, DirectoryView, Navigator};
pub use preview::PreviewKind;
pub use remote::RawUrlTemplate;
pub use search::SearchTerm;
pub use shared::{MemoryStorage, RecordDraft, RecordStorage, SharedFile, SharedFileStore};
