//! Navigation state for the file browser.
//!
//! A [`Navigator`] holds the current path and search term. Rendering is a
//! pure function of that state and the [`Catalog`]: every call to
//! [`Navigator::render`] re-applies the filter, nothing is cached.

use serde::Serialize;

use crate::breadcrumb::{Crumb, breadcrumb};
use crate::catalog::{Catalog, FileInfo, FolderInfo};
use crate::path;
use crate::search::SearchTerm;

/// Immediate child counts of the current directory (ignores the search filter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DirStats {
    pub folders: usize,
    pub files: usize,
}

impl DirStats {
    pub fn total(&self) -> usize {
        self.folders + self.files
    }
}

/// Everything the UI needs to draw the current directory.
#[derive(Clone, Debug, Serialize)]
pub struct DirectoryView<'a> {
    /// Path being displayed
    pub path: String,
    /// Folders matching the search term, in catalog order
    pub folders: Vec<&'a FolderInfo>,
    /// Files matching the search term, in catalog order
    pub files: Vec<&'a FileInfo>,
    pub breadcrumb: Vec<Crumb>,
    pub stats: DirStats,
}

impl DirectoryView<'_> {
    /// Nothing matched (or the directory is empty).
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// Current location and search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    current_path: String,
    search: SearchTerm,
}

impl Navigator {
    /// Navigator at the root with no search term.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn search_term(&self) -> &str {
        self.search.as_str()
    }

    pub fn is_root(&self) -> bool {
        self.current_path.is_empty()
    }

    /// Jump to `path`. The path is not validated; unknown paths render empty.
    pub fn navigate_to(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Descend into a child folder of the current directory.
    pub fn enter_folder(&mut self, id: &str) {
        self.current_path = path::join(&self.current_path, id);
    }

    /// Move to the parent directory (no-op at root).
    pub fn go_up(&mut self) {
        self.current_path = path::parent(&self.current_path).to_string();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = SearchTerm::new(term);
    }

    pub fn clear_search(&mut self) {
        self.search = SearchTerm::default();
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        breadcrumb(&self.current_path)
    }

    /// Filter the current directory's children and collect crumbs and stats.
    pub fn render<'a>(&self, catalog: &'a Catalog) -> DirectoryView<'a> {
        let dir = catalog.lookup(&self.current_path);

        let folders = dir
            .folders
            .iter()
            .map(|f| &f.info)
            .filter(|info| self.search.matches(&info.name, &info.description))
            .collect();

        let files = dir
            .files
            .iter()
            .filter(|file| self.search.matches(&file.name, &file.description))
            .collect();

        DirectoryView {
            path: self.current_path.clone(),
            folders,
            files,
            breadcrumb: self.breadcrumb(),
            stats: DirStats {
                folders: dir.folders.len(),
                files: dir.files.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "": {
                    "folders": [
                        {"id": "tech", "name": "Tech Docs", "description": "Guides and specs"},
                        {"id": "images", "name": "Images", "description": "Design assets"}
                    ],
                    "files": [
                        {"id": "r", "name": "README.pdf", "url": "files/README.pdf", "description": "How to use"}
                    ]
                },
                "tech": {
                    "folders": [{"id": "api", "name": "API", "description": "Interfaces"}],
                    "files": [
                        {"id": "t1", "name": "architecture.docx", "url": "files/tech/architecture.docx", "description": "System design"},
                        {"id": "t2", "name": "style.pdf", "url": "files/tech/style.pdf", "description": "Coding rules"}
                    ]
                },
                "tech/api": {
                    "files": [{"id": "a1", "name": "REST.pdf", "url": "files/tech/api/REST.pdf"}]
                },
                "images": {}
            }"#,
        )
        .expect("test catalog")
    }

    #[test]
    fn test_starts_at_root() {
        let nav = Navigator::new();
        assert!(nav.is_root());
        assert_eq!(nav.search_term(), "");
    }

    #[test]
    fn test_enter_folder_from_root() {
        let mut nav = Navigator::new();
        nav.enter_folder("tech");
        assert_eq!(nav.current_path(), "tech");
    }

    #[test]
    fn test_enter_folder_nested() {
        let mut nav = Navigator::new();
        nav.enter_folder("tech");
        nav.enter_folder("api");
        assert_eq!(nav.current_path(), "tech/api");
        assert!(!nav.current_path().contains("//"));
    }

    #[test]
    fn test_go_up() {
        let mut nav = Navigator::new();
        nav.navigate_to("tech/api");
        nav.go_up();
        assert_eq!(nav.current_path(), "tech");
        nav.go_up();
        assert!(nav.is_root());
        nav.go_up();
        assert!(nav.is_root());
    }

    #[test]
    fn test_render_root() {
        let catalog = catalog();
        let view = Navigator::new().render(&catalog);
        assert_eq!(view.folders.len(), 2);
        assert_eq!(view.files.len(), 1);
        assert_eq!(view.stats, DirStats { folders: 2, files: 1 });
        assert_eq!(view.breadcrumb.len(), 1);
    }

    #[test]
    fn test_render_unknown_path_is_empty() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.navigate_to("does/not/exist");
        let view = nav.render(&catalog);
        assert!(view.is_empty());
        assert_eq!(view.stats.total(), 0);
        // Breadcrumb still reflects the requested path
        assert_eq!(view.breadcrumb.len(), 4);
    }

    #[test]
    fn test_search_filters_folders_and_files_independently() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.navigate_to("tech");

        nav.set_search_term("API");
        let view = nav.render(&catalog);
        assert_eq!(view.folders.len(), 1);
        assert!(view.files.is_empty());

        nav.set_search_term("design");
        let view = nav.render(&catalog);
        assert!(view.folders.is_empty());
        assert_eq!(view.files.len(), 1);
        assert_eq!(view.files[0].id, "t1");
    }

    #[test]
    fn test_stats_ignore_filter() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.navigate_to("tech");
        nav.set_search_term("zzz-no-match");
        let view = nav.render(&catalog);
        assert!(view.is_empty());
        assert_eq!(view.stats, DirStats { folders: 1, files: 2 });
    }

    #[test]
    fn test_search_survives_navigation() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.set_search_term("rest");
        nav.navigate_to("tech/api");
        let view = nav.render(&catalog);
        assert_eq!(view.files.len(), 1);

        nav.clear_search();
        assert_eq!(nav.search_term(), "");
    }

    #[test]
    fn test_breadcrumb_follows_navigation() {
        let mut nav = Navigator::new();
        nav.navigate_to("tech/api");
        let paths: Vec<_> = nav.breadcrumb().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["", "tech", "tech/api"]);
    }
}
