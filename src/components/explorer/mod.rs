//! Catalog explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`FolderList`] - Child folders as cards
//! - [`FileList`] - Files with preview and download actions
//! - [`PreviewModal`] - Image/PDF preview dialog

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod folder_list;
mod header;
mod pathbar;
mod preview;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use folder_list::FolderList;
pub use preview::PreviewModal;
