//! Recorded files page.
//!
//! Lists the records kept in this browser's localStorage with a search box.

use filedeck_core::{SearchTerm, SharedFile, SharedFileStore, icon_for_name};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{NO_DESCRIPTION, SEARCH_PLACEHOLDER};
use crate::models::AppRoute;
use crate::utils::log;
use crate::utils::storage::{BrowserStorage, open_shared_files};

stylance::import_crate_style!(css, "src/components/shared/shared.module.css");

#[component]
pub fn SharedList() -> impl IntoView {
    let (store, load_error) = match open_shared_files() {
        Ok(store) => (Some(store), None),
        Err(e) => {
            log::warn(&format!("shared files unavailable: {}", e));
            (None, Some(e.to_string()))
        }
    };
    let store: StoredValue<Option<SharedFileStore<BrowserStorage>>> = StoredValue::new(store);

    let search = RwSignal::new(String::new());
    let total = store.with_value(|s| s.as_ref().map_or(0, |s| s.files().len()));

    let visible = Memo::new(move |_| {
        let term = SearchTerm::new(search.get());
        store.with_value(|s| {
            s.as_ref()
                .map(|s| s.filter(&term).into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    view! {
        <section class=css::page>
            <header class=css::header>
                <h1 class=css::title>"Shared files"</h1>
                <a class=css::primaryButton href=AppRoute::Record.to_hash()>
                    <Icon icon=ic::PLUS />
                    "Record a file"
                </a>
            </header>

            {load_error.map(|message| view! { <p class=css::statusError>{message}</p> })}

            <label class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder=SEARCH_PLACEHOLDER
                    aria-label="Search shared files"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </label>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! {
                    <p class=css::empty>
                        {if total == 0 { "No files recorded yet." } else { "No files match your search." }}
                    </p>
                }
            >
                <div class=css::list role="list">
                    <For
                        each=move || visible.get()
                        key=|file| file.id
                        children=move |file| view! { <SharedRow file=file /> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn SharedRow(file: SharedFile) -> impl IntoView {
    let description = if file.description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        file.description.clone()
    };
    let meta = format!("{} • {}", file.upload_date, file.size);

    view! {
        <div class=css::row role="listitem">
            <div class=css::info>
                <h4 class=css::name>{format!("{} {}", icon_for_name(&file.name), file.name)}</h4>
                <p class=css::description>{description}</p>
                <span class=css::meta>{meta}</span>
            </div>
            <a
                class=css::downloadButton
                href=file.url
                download=file.name.clone()
                target="_blank"
                rel="noopener"
            >
                <Icon icon=ic::DOWNLOAD />
                "Download"
            </a>
        </div>
    }
}
