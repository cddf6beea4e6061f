//! Main explorer component.
//!
//! The catalog browser with header, path bar, folder and file lists, and
//! the preview modal.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: folders as a card grid, files as rows below
//! - **Mobile (< 768px)**: single column; the preview modal goes full screen

use filedeck_core::{Crumb, DirStats, DirectoryView, FileInfo, FolderInfo};
use leptos::prelude::*;

use super::header::Header;
use super::pathbar::PathBar;
use super::{FileList, FolderList, PreviewModal};
use crate::app::AppContext;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Owned snapshot of the current directory, as rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listing {
    pub path: String,
    pub folders: Vec<FolderInfo>,
    pub files: Vec<FileInfo>,
    pub crumbs: Vec<Crumb>,
    pub stats: DirStats,
    pub search: String,
}

impl Listing {
    fn new(view: DirectoryView<'_>, search: &str) -> Self {
        Self {
            path: view.path,
            folders: view.folders.into_iter().cloned().collect(),
            files: view.files.into_iter().cloned().collect(),
            crumbs: view.breadcrumb,
            stats: view.stats,
            search: search.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// Current listing, recomputed whenever the navigator changes.
pub fn use_listing() -> Memo<Listing> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    Memo::new(move |_| {
        ctx.explorer.navigator.with(|nav| {
            ctx.catalog
                .with_value(|catalog| Listing::new(nav.render(catalog), nav.search_term()))
        })
    })
}

/// Enter a child folder of the current directory.
pub fn enter_folder(ctx: AppContext, id: &str) {
    let mut nav = ctx.explorer.navigator.get_untracked();
    nav.enter_folder(id);
    AppRoute::browse(nav.current_path()).push();
}

/// Go to the parent of the current directory.
pub fn go_up(ctx: AppContext) {
    let mut nav = ctx.explorer.navigator.get_untracked();
    nav.go_up();
    AppRoute::browse(nav.current_path()).push();
}

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let listing = use_listing();

    view! {
        <div class=css::explorer>
            <Header listing=listing />
            <PathBar listing=listing />

            <div class=css::body>
                <Show
                    when=move || !listing.with(|l| l.is_empty())
                    fallback=move || view! { <EmptyState listing=listing /> }
                >
                    <FolderList listing=listing />
                    <FileList listing=listing />
                </Show>
            </div>

            <PreviewModal />
        </div>
    }
}

#[component]
fn EmptyState(listing: Memo<Listing>) -> impl IntoView {
    let message = move || {
        listing.with(|l| {
            if l.search.trim().is_empty() {
                "This folder is empty".to_string()
            } else {
                format!("No matches for \"{}\"", l.search.trim())
            }
        })
    };

    view! {
        <div class=css::empty>
            <span class=css::emptyIcon>"📂"</span>
            <p>{message}</p>
        </div>
    }
}
