//! The static file catalog.
//!
//! The catalog is authored as a flat, path-keyed map ([`FlatCatalog`]) and
//! assembled into an explicit tree ([`Catalog`]) where every folder owns its
//! contents. A folder can therefore never point at a missing directory once
//! the tree exists; problems in the flat form are reported as
//! [`CatalogIssue`]s during assembly.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogIssue};
use crate::path;

/// Catalog JSON embedded at compile time.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/catalog.json");

// =============================================================================
// Flat (authored) form
// =============================================================================

/// Folder metadata as listed inside its parent.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderInfo {
    /// Path segment for this folder (joined onto the parent path)
    pub id: String,
    /// Display name
    pub name: String,
    /// Display icon (usually an emoji)
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// File metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileInfo {
    pub id: String,
    /// File name including extension (drives preview dispatch)
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Human-readable size, e.g. "2.3 MB"
    #[serde(default)]
    pub size: String,
    /// Path relative to the repository root, e.g. "files/tech/manual.pdf"
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Whether the UI offers a preview for this file
    #[serde(default)]
    pub preview: bool,
}

/// One directory of the flat catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub folders: Vec<FolderInfo>,
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

/// Path-keyed catalog as stored in `catalog.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FlatCatalog {
    pub entries: BTreeMap<String, CatalogEntry>,
}

impl FlatCatalog {
    /// Parse the flat form from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// Tree form
// =============================================================================

/// A directory node: ordered folders (each owning its contents) and files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    pub folders: Vec<Folder>,
    pub files: Vec<FileInfo>,
}

/// A folder together with its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub info: FolderInfo,
    pub contents: Directory,
}

static EMPTY_DIRECTORY: Directory = Directory {
    folders: Vec::new(),
    files: Vec::new(),
};

impl Directory {
    /// Find an immediate child folder by id.
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.info.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// The immutable catalog tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    root: Directory,
}

impl Catalog {
    /// Catalog with an empty root (fallback when loading fails).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Parse and assemble a catalog, rejecting any integrity issue.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_flat(&FlatCatalog::from_json(json)?)
    }

    /// Assemble the tree, rejecting any integrity issue.
    pub fn from_flat(flat: &FlatCatalog) -> Result<Self, CatalogError> {
        let (catalog, issues) = Self::assemble(flat);
        if issues.is_empty() {
            Ok(catalog)
        } else {
            Err(CatalogError::Integrity(issues))
        }
    }

    /// Assemble the tree, keeping whatever is consistent and reporting the rest.
    ///
    /// Folders without an entry become empty directories; duplicate and
    /// invalid folder ids are dropped; unreachable entries are reported.
    pub fn assemble(flat: &FlatCatalog) -> (Self, Vec<CatalogIssue>) {
        let mut issues = Vec::new();
        let mut visited = HashSet::new();

        let root = match flat.entries.get("") {
            Some(entry) => build_directory(flat, "", entry, &mut visited, &mut issues),
            None => Directory::default(),
        };
        visited.insert(String::new());

        for key in flat.entries.keys() {
            if !visited.contains(key) {
                issues.push(CatalogIssue::Unreachable { path: key.clone() });
            }
        }

        (Self { root }, issues)
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Resolve a path to its directory, if it exists.
    ///
    /// Segments are matched exactly, so `"tech/"` or `"tech//api"` do not resolve.
    pub fn get(&self, path: &str) -> Option<&Directory> {
        if path.is_empty() {
            return Some(&self.root);
        }

        let mut current = &self.root;
        for segment in path.split(path::SEPARATOR) {
            current = &current.folder(segment)?.contents;
        }
        Some(current)
    }

    /// Directory listing for a path; unknown paths yield an empty listing.
    pub fn lookup(&self, path: &str) -> &Directory {
        self.get(path).unwrap_or(&EMPTY_DIRECTORY)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Folder metadata for a non-root path.
    pub fn folder_at(&self, path: &str) -> Option<&FolderInfo> {
        if path.is_empty() {
            return None;
        }
        let parent = self.get(path::parent(path))?;
        parent.folder(path::file_name(path)).map(|f| &f.info)
    }

    /// Depth-first walk over every directory, in catalog order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(String::new(), &self.root)],
        }
    }

    /// Total (folders, files) across the whole catalog.
    pub fn totals(&self) -> (usize, usize) {
        self.walk().fold((0, 0), |(folders, files), (_, dir)| {
            (folders + dir.folders.len(), files + dir.files.len())
        })
    }
}

fn build_directory(
    flat: &FlatCatalog,
    path: &str,
    entry: &CatalogEntry,
    visited: &mut HashSet<String>,
    issues: &mut Vec<CatalogIssue>,
) -> Directory {
    visited.insert(path.to_string());

    let mut seen_files = HashSet::new();
    for file in &entry.files {
        if !seen_files.insert(file.id.as_str()) {
            issues.push(CatalogIssue::DuplicateFile {
                parent: path.to_string(),
                id: file.id.clone(),
            });
        }
    }

    let mut seen_folders = HashSet::new();
    let mut folders = Vec::with_capacity(entry.folders.len());
    for info in &entry.folders {
        if info.id.is_empty() || info.id.contains(path::SEPARATOR) {
            issues.push(CatalogIssue::InvalidId {
                parent: path.to_string(),
                id: info.id.clone(),
            });
            continue;
        }
        if !seen_folders.insert(info.id.as_str()) {
            issues.push(CatalogIssue::DuplicateFolder {
                parent: path.to_string(),
                id: info.id.clone(),
            });
            continue;
        }

        let child_path = path::join(path, &info.id);
        let contents = match flat.entries.get(&child_path) {
            Some(child) => build_directory(flat, &child_path, child, visited, issues),
            None => {
                issues.push(CatalogIssue::MissingEntry {
                    parent: path.to_string(),
                    path: child_path,
                });
                Directory::default()
            }
        };

        folders.push(Folder {
            info: info.clone(),
            contents,
        });
    }

    Directory {
        folders,
        files: entry.files.clone(),
    }
}

/// Iterator returned by [`Catalog::walk`]: `(path, directory)` in pre-order.
pub struct Walk<'a> {
    stack: Vec<(String, &'a Directory)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (String, &'a Directory);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, dir) = self.stack.pop()?;
        for folder in dir.folders.iter().rev() {
            self.stack
                .push((path::join(&path, &folder.info.id), &folder.contents));
        }
        Some((path, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str) -> FolderInfo {
        FolderInfo {
            id: id.to_string(),
            name: name.to_string(),
            icon: String::new(),
            description: String::new(),
        }
    }

    fn file(id: &str, name: &str) -> FileInfo {
        FileInfo {
            id: id.to_string(),
            name: name.to_string(),
            icon: String::new(),
            size: "1 MB".to_string(),
            url: format!("files/{}", name),
            description: String::new(),
            preview: false,
        }
    }

    fn flat(entries: Vec<(&str, CatalogEntry)>) -> FlatCatalog {
        FlatCatalog {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    fn create_test_flat() -> FlatCatalog {
        flat(vec![
            (
                "",
                CatalogEntry {
                    folders: vec![folder("docs", "Docs"), folder("media", "Media")],
                    files: vec![file("readme", "readme.pdf")],
                },
            ),
            (
                "docs",
                CatalogEntry {
                    folders: vec![folder("api", "API")],
                    files: vec![file("d1", "guide.docx")],
                },
            ),
            (
                "docs/api",
                CatalogEntry {
                    folders: vec![],
                    files: vec![file("a1", "rest.pdf")],
                },
            ),
            ("media", CatalogEntry::default()),
        ])
    }

    #[test]
    fn test_from_flat() {
        let catalog = Catalog::from_flat(&create_test_flat()).expect("valid catalog");
        assert_eq!(catalog.root().folders.len(), 2);
        assert_eq!(catalog.root().files.len(), 1);
        assert_eq!(catalog.lookup("docs/api").files[0].name, "rest.pdf");
    }

    #[test]
    fn test_folder_order_preserved() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        let ids: Vec<_> = catalog
            .root()
            .folders
            .iter()
            .map(|f| f.info.id.as_str())
            .collect();
        assert_eq!(ids, vec!["docs", "media"]);
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        assert!(catalog.lookup("nope").is_empty());
        assert!(catalog.lookup("docs/nope").is_empty());
        assert!(catalog.lookup("docs/api/deeper").is_empty());
        assert!(!catalog.contains("nope"));
    }

    #[test]
    fn test_lookup_requires_exact_segments() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        assert!(catalog.lookup("docs/").is_empty());
        assert!(catalog.lookup("docs//api").is_empty());
        assert!(catalog.lookup("/docs").is_empty());
    }

    #[test]
    fn test_folder_at() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        assert_eq!(catalog.folder_at("docs/api").map(|f| f.name.as_str()), Some("API"));
        assert_eq!(catalog.folder_at("docs").map(|f| f.name.as_str()), Some("Docs"));
        assert!(catalog.folder_at("").is_none());
        assert!(catalog.folder_at("docs/missing").is_none());
    }

    #[test]
    fn test_missing_entry_reported() {
        let mut f = create_test_flat();
        f.entries.remove("media");
        let (catalog, issues) = Catalog::assemble(&f);

        assert_eq!(
            issues,
            vec![CatalogIssue::MissingEntry {
                parent: String::new(),
                path: "media".to_string(),
            }]
        );
        // The folder still exists, just empty
        assert!(catalog.contains("media"));
        assert!(matches!(
            Catalog::from_flat(&f),
            Err(CatalogError::Integrity(_))
        ));
    }

    #[test]
    fn test_unreachable_entry_reported() {
        let mut f = create_test_flat();
        f.entries.insert("ghost".to_string(), CatalogEntry::default());
        let (_, issues) = Catalog::assemble(&f);
        assert_eq!(
            issues,
            vec![CatalogIssue::Unreachable {
                path: "ghost".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_and_invalid_ids() {
        let f = flat(vec![(
            "",
            CatalogEntry {
                folders: vec![folder("a", "A"), folder("a", "A again"), folder("x/y", "Bad")],
                files: vec![file("f", "one.txt"), file("f", "two.txt")],
            },
        ), ("a", CatalogEntry::default())]);

        let (catalog, issues) = Catalog::assemble(&f);
        assert_eq!(catalog.root().folders.len(), 1);
        assert!(issues.contains(&CatalogIssue::DuplicateFolder {
            parent: String::new(),
            id: "a".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::InvalidId {
            parent: String::new(),
            id: "x/y".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateFile {
            parent: String::new(),
            id: "f".to_string(),
        }));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let (catalog, issues) = Catalog::assemble(&FlatCatalog::default());
        assert!(issues.is_empty());
        assert!(catalog.root().is_empty());
    }

    #[test]
    fn test_walk_preorder() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        let paths: Vec<_> = catalog.walk().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["", "docs", "docs/api", "media"]);
    }

    #[test]
    fn test_totals() {
        let catalog = Catalog::from_flat(&create_test_flat()).unwrap();
        assert_eq!(catalog.totals(), (3, 3));
    }

    #[test]
    fn test_parse_defaults() {
        let json = r#"{"": {"files": [{"id": "x", "name": "x.pdf", "url": "files/x.pdf"}]}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let f = &catalog.root().files[0];
        assert!(!f.preview);
        assert!(f.description.is_empty());
        assert!(catalog.root().folders.is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
