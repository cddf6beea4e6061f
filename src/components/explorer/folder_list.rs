//! Folder cards for the current directory.

use filedeck_core::FolderInfo;
use filedeck_core::icons::DEFAULT_ICON;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::explorer::{Listing, enter_folder};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/folder_list.module.css");

#[component]
pub fn FolderList(listing: Memo<Listing>) -> impl IntoView {
    let has_folders = Signal::derive(move || listing.with(|l| !l.folders.is_empty()));

    view! {
        <Show when=move || has_folders.get()>
            <section class=css::section aria-label="Folders">
                <h2 class=css::heading>"Folders"</h2>
                <div class=css::grid>
                    <For
                        each=move || listing.with(|l| l.folders.clone())
                        key=|folder| folder.id.clone()
                        children=move |folder| view! { <FolderCard folder=folder /> }
                    />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn FolderCard(folder: FolderInfo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = if folder.icon.is_empty() {
        DEFAULT_ICON.to_string()
    } else {
        folder.icon.clone()
    };
    let id = folder.id.clone();
    let aria_label = format!("Folder: {}", folder.name);

    view! {
        <button
            class=css::card
            on:click=move |_| enter_folder(ctx, &id)
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true">{icon}</span>
            <span class=css::body>
                <span class=css::name>{folder.name}</span>
                <span class=css::description>{folder.description}</span>
            </span>
            <span class=css::chevron aria-hidden="true">
                <Icon icon=ic::CHEVRON_RIGHT />
            </span>
        </button>
    }
}
