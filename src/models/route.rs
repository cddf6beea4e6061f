//! Hash-based routing (works on any static host).
//!
//! URL format:
//! - `#/` → explorer at root
//! - `#/browse/tech/api` → explorer at `tech/api`
//! - `#/shared` → recorded files list
//! - `#/record` → record form

use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Explorer at a catalog path (empty = root)
    Browse { path: String },
    /// Recorded files list
    Shared,
    /// Record form
    Record,
}

/// Top-level page, ignoring the browse path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Explorer,
    Shared,
    Record,
}

impl AppRoute {
    /// Explorer route for `path`.
    pub fn browse(path: impl Into<String>) -> Self {
        Self::Browse { path: path.into() }
    }

    /// Parse URL hash into a route. Unknown hashes open the explorer root.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        match path {
            "shared" => Self::Shared,
            "record" => Self::Record,
            "" | "browse" => Self::browse(""),
            _ => match path.strip_prefix("browse/") {
                Some(rest) => Self::browse(rest.trim_end_matches('/')),
                None => Self::browse(""),
            },
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Browse { path } if path.is_empty() => "#/".to_string(),
            Self::Browse { path } => format!("#/browse/{}", path),
            Self::Shared => "#/shared".to_string(),
            Self::Record => "#/record".to_string(),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Self::Browse { .. } => Page::Explorer,
            Self::Shared => Page::Shared,
            Self::Record => Page::Record,
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let hash = dom::get_hash();
        let decoded = js_sys::decode_uri_component(&hash)
            .map(String::from)
            .unwrap_or(hash);
        Self::from_hash(&decoded)
    }

    /// Navigate to this route (fires `hashchange`).
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}
