//! Error types for the core crate.
//!
//! - [`CatalogError`] - catalog loading failures (bad JSON, broken references)
//! - [`CatalogIssue`] - a single integrity problem found while assembling the tree
//! - [`StoreError`] - shared-file list persistence failures

use std::fmt;

use thiserror::Error;

/// A single integrity problem in a flat catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A folder is listed under `parent`, but no entry exists for its path.
    MissingEntry { parent: String, path: String },
    /// An entry exists that no folder points at.
    Unreachable { path: String },
    /// Two folders in the same directory share an id.
    DuplicateFolder { parent: String, id: String },
    /// Two files in the same directory share an id.
    DuplicateFile { parent: String, id: String },
    /// A folder id is empty or contains a path separator.
    InvalidId { parent: String, id: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntry { parent, path } => {
                write!(f, "folder '{}' (in '{}') has no entry", path, display_dir(parent))
            }
            Self::Unreachable { path } => {
                write!(f, "entry '{}' is not referenced by any folder", path)
            }
            Self::DuplicateFolder { parent, id } => {
                write!(f, "duplicate folder id '{}' in '{}'", id, display_dir(parent))
            }
            Self::DuplicateFile { parent, id } => {
                write!(f, "duplicate file id '{}' in '{}'", id, display_dir(parent))
            }
            Self::InvalidId { parent, id } => {
                write!(f, "invalid folder id '{}' in '{}'", id, display_dir(parent))
            }
        }
    }
}

fn first_issue(issues: &[CatalogIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

fn display_dir(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog parsed, but its folder references are inconsistent.
    #[error("catalog has {} integrity issue(s), first: {}", .0.len(), first_issue(.0))]
    Integrity(Vec<CatalogIssue>),
}

/// Shared-file list persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing storage is not available (e.g. localStorage disabled).
    #[error("storage not available")]
    Unavailable,
    /// Writing the list back failed.
    #[error("failed to write shared files: {0}")]
    WriteFailed(String),
    /// The stored list is not valid JSON.
    #[error("stored shared files are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// A required form field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_root() {
        let issue = CatalogIssue::MissingEntry {
            parent: String::new(),
            path: "tech".to_string(),
        };
        assert_eq!(issue.to_string(), "folder 'tech' (in '/') has no entry");
    }

    #[test]
    fn test_integrity_error_mentions_first_issue() {
        let err = CatalogError::Integrity(vec![
            CatalogIssue::Unreachable {
                path: "orphan".to_string(),
            },
            CatalogIssue::Unreachable {
                path: "other".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 integrity issue(s)"));
        assert!(msg.contains("orphan"));
    }
}
