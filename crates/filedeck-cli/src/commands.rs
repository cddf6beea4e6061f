//! Subcommand implementations.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use filedeck_core::catalog::{BUILTIN_CATALOG_JSON, FlatCatalog};
use filedeck_core::{Catalog, Directory, DirectoryView, Navigator, PreviewKind, RawUrlTemplate};

/// Where the catalog JSON comes from.
pub struct CatalogSource {
    file: Option<PathBuf>,
}

impl CatalogSource {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    fn flat(&self) -> Result<FlatCatalog> {
        let json = match &self.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => BUILTIN_CATALOG_JSON.to_string(),
        };
        Ok(FlatCatalog::from_json(&json)?)
    }

    /// Assembled catalog; integrity issues are fatal here, `check` reports them.
    fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::from_flat(&self.flat()?)?)
    }
}

pub fn check(source: &CatalogSource) -> Result<()> {
    let flat = source.flat()?;
    let (catalog, issues) = Catalog::assemble(&flat);

    if issues.is_empty() {
        let (folders, files) = catalog.totals();
        println!(
            "ok: {} entries, {} folders, {} files",
            flat.entries.len(),
            folders,
            files
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("error: {}", issue);
    }
    bail!("{} integrity issue(s) found", issues.len())
}

pub fn ls(source: &CatalogSource, path: &str, search: Option<String>, json: bool) -> Result<()> {
    let catalog = source.catalog()?;
    let mut nav = Navigator::new();
    nav.navigate_to(path);
    if let Some(term) = search {
        nav.set_search_term(term);
    }

    let view = nav.render(&catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_listing(&view));
    }
    Ok(())
}

pub fn tree(source: &CatalogSource) -> Result<()> {
    let catalog = source.catalog()?;
    print!("{}", format_tree(&catalog));
    Ok(())
}

pub fn url(path: &str, user: &str, repo: &str, branch: &str) {
    println!("{}", RawUrlTemplate::new(user, repo, branch).url_for(path));
}

fn format_listing(view: &DirectoryView<'_>) -> String {
    let mut out = String::new();
    let trail: Vec<_> = view.breadcrumb.iter().map(|c| c.label.as_str()).collect();
    let _ = writeln!(out, "{}", trail.join(" > "));

    for folder in &view.folders {
        let _ = writeln!(out, "{} {}/  {}", folder.icon, folder.id, folder.name);
    }
    for file in &view.files {
        let marker = if file.preview && PreviewKind::from_name(&file.name).is_supported() {
            " [preview]"
        } else {
            ""
        };
        let _ = writeln!(out, "{} {}  {}{}", file.icon, file.name, file.size, marker);
    }
    if view.is_empty() {
        let _ = writeln!(out, "(empty)");
    }
    let _ = writeln!(
        out,
        "{} folders, {} files",
        view.stats.folders, view.stats.files
    );
    out
}

fn format_tree(catalog: &Catalog) -> String {
    let mut out = String::from("/\n");
    write_directory(&mut out, catalog.root(), 1);
    out
}

fn write_directory(out: &mut String, dir: &Directory, depth: usize) {
    let indent = "  ".repeat(depth);
    for folder in &dir.folders {
        let _ = writeln!(out, "{}{} {}/", indent, folder.info.icon, folder.info.id);
        write_directory(out, &folder.contents, depth + 1);
    }
    for file in &dir.files {
        let _ = writeln!(out, "{}{} {}", indent, file.icon, file.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_format_listing_root() {
        let catalog = builtin();
        let view = Navigator::new().render(&catalog);
        let text = format_listing(&view);
        assert!(text.starts_with("Home\n"));
        assert!(text.contains("tech/"));
        assert!(text.ends_with("4 folders, 1 files\n"));
    }

    #[test]
    fn test_format_listing_empty() {
        let catalog = builtin();
        let mut nav = Navigator::new();
        nav.navigate_to("nowhere");
        let text = format_listing(&nav.render(&catalog));
        assert!(text.contains("(empty)"));
        assert!(text.starts_with("Home > nowhere\n"));
    }

    #[test]
    fn test_format_tree_nests_contents() {
        let catalog = builtin();
        let text = format_tree(&catalog);
        let tech = text.find(" tech/").unwrap();
        let api = text.find(" api/").unwrap();
        let images = text.find(" images/").unwrap();
        assert!(tech < api && api < images);
    }

    #[test]
    fn test_format_tree_mentions_every_file() {
        let catalog = builtin();
        let text = format_tree(&catalog);
        for (_, dir) in catalog.walk() {
            for file in &dir.files {
                assert!(text.contains(&file.name));
            }
        }
    }
}
