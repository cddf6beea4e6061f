//! Checks against the catalog shipped with the site.

use filedeck_core::catalog::{BUILTIN_CATALOG_JSON, FlatCatalog};
use filedeck_core::{Catalog, Navigator, PreviewKind, RawUrlTemplate};

fn builtin() -> Catalog {
    Catalog::builtin().expect("built-in catalog should load")
}

#[test]
fn builtin_catalog_has_no_integrity_issues() {
    let flat = FlatCatalog::from_json(BUILTIN_CATALOG_JSON).unwrap();
    let (_, issues) = Catalog::assemble(&flat);
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn every_flat_entry_is_reachable_in_the_tree() {
    let flat = FlatCatalog::from_json(BUILTIN_CATALOG_JSON).unwrap();
    let catalog = builtin();
    for (path, entry) in &flat.entries {
        let dir = catalog.lookup(path);
        assert_eq!(dir.files, entry.files, "files differ at '{}'", path);
        assert_eq!(dir.folders.len(), entry.folders.len(), "folders differ at '{}'", path);
    }
}

#[test]
fn root_listing() {
    let catalog = builtin();
    let view = Navigator::new().render(&catalog);
    let ids: Vec<_> = view.folders.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["tech", "images", "software", "templates"]);
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.stats.total(), 5);
}

#[test]
fn navigate_into_tech_api() {
    let catalog = builtin();
    let mut nav = Navigator::new();
    nav.enter_folder("tech");
    nav.enter_folder("api");
    assert_eq!(nav.current_path(), "tech/api");

    let view = nav.render(&catalog);
    assert_eq!(view.files.len(), 1);
    assert_eq!(PreviewKind::from_name(&view.files[0].name), PreviewKind::Pdf);

    let crumbs: Vec<_> = view.breadcrumb.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(crumbs, vec!["", "tech", "tech/api"]);
}

#[test]
fn unknown_paths_list_nothing() {
    let catalog = builtin();
    for path in ["missing", "tech/missing", "tech/api/deeper", "images/"] {
        let dir = catalog.lookup(path);
        assert!(dir.folders.is_empty() && dir.files.is_empty(), "'{}' not empty", path);
    }
}

#[test]
fn search_spans_name_and_description() {
    let catalog = builtin();
    let mut nav = Navigator::new();
    nav.navigate_to("images");

    nav.set_search_term("LOGO");
    assert_eq!(nav.render(&catalog).files.len(), 1);

    // Only in the description of 背景图片.jpg
    nav.set_search_term("网站背景");
    let view = nav.render(&catalog);
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.stats.files, 3);
}

#[test]
fn previewable_images_dispatch_to_image_mode() {
    let catalog = builtin();
    for file in &catalog.lookup("images").files {
        assert!(file.preview);
        assert_eq!(PreviewKind::from_name(&file.name), PreviewKind::Image);
    }
}

#[test]
fn download_urls_use_repository_paths() {
    let catalog = builtin();
    let template = RawUrlTemplate::new("owner", "site", "main");
    let readme = &catalog.root().files[0];
    assert_eq!(
        template.url_for(&readme.url),
        format!("https://raw.githubusercontent.com/owner/site/main/{}", readme.url)
    );
}
