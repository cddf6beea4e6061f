//! Explorer header component.
//!
//! Contains the up button, current location title, search box and stats.

use filedeck_core::breadcrumb::ROOT_LABEL;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::explorer::{Listing, go_up};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_PLACEHOLDER;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with navigation, search and stats.
#[component]
pub fn Header(listing: Memo<Listing>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_root = Signal::derive(move || listing.with(|l| l.path.is_empty()));

    // Display name of the current folder, falling back to its id
    let title = Memo::new(move |_| {
        let path = listing.with(|l| l.path.clone());
        if path.is_empty() {
            return ROOT_LABEL.to_string();
        }
        ctx.catalog.with_value(|catalog| {
            catalog
                .folder_at(&path)
                .map(|info| info.name.clone())
                .unwrap_or_else(|| filedeck_core::path::file_name(&path).to_string())
        })
    });

    let stats = move || {
        listing.with(|l| {
            format!("{} folders · {} files", l.stats.folders, l.stats.files)
        })
    };

    view! {
        <header class=css::header>
            <button
                class=move || {
                    if is_root.get() {
                        format!("{} {}", css::navButton, css::navButtonDisabled)
                    } else {
                        css::navButton.to_string()
                    }
                }
                on:click=move |_| go_up(ctx)
                disabled=move || is_root.get()
                title="Go to parent folder"
            >
                <Icon icon=ic::UP />
            </button>

            <div class=css::title>
                <span class=css::titleIcon>
                    {move || if is_root.get() {
                        view! { <Icon icon=ic::HOME /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::FOLDER /> }.into_any()
                    }}
                </span>
                <span class=css::titleLabel>{move || title.get()}</span>
            </div>

            <SearchBox />

            <span class=css::stats>{stats}</span>
        </header>
    }
}

/// Search input bound to the navigator's search term.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let term = Signal::derive(move || {
        ctx.explorer
            .navigator
            .with(|n| n.search_term().to_string())
    });

    view! {
        <label class=css::search>
            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
            <input
                class=css::searchInput
                type="search"
                placeholder=SEARCH_PLACEHOLDER
                aria-label="Search"
                prop:value=move || term.get()
                on:input=move |ev| ctx.explorer.set_search(event_target_value(&ev))
            />
            <Show when=move || !term.with(|t| t.is_empty())>
                <button
                    class=css::searchClear
                    on:click=move |_| ctx.explorer.clear_search()
                    title="Clear search"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
        </label>
    }
}
