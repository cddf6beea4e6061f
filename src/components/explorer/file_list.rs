//! File rows for the current directory.
//!
//! Each row offers a download link, plus a preview button for files the
//! catalog marks as previewable.

use filedeck_core::{FileInfo, PreviewKind, icon_for_name};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::explorer::Listing;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::raw_url_template;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Chrome icon for the preview button, by preview kind.
fn preview_icon(kind: PreviewKind) -> IconData {
    match kind {
        PreviewKind::Image => ic::FILE_IMAGE,
        PreviewKind::Pdf => ic::FILE_PDF,
        PreviewKind::Unsupported => ic::EYE,
    }
}

#[component]
pub fn FileList(listing: Memo<Listing>) -> impl IntoView {
    let has_files = Signal::derive(move || listing.with(|l| !l.files.is_empty()));

    view! {
        <Show when=move || has_files.get()>
            <section class=css::section aria-label="Files">
                <h2 class=css::heading>"Files"</h2>
                <div class=css::list role="list">
                    <For
                        each=move || listing.with(|l| l.files.clone())
                        key=|file| file.id.clone()
                        children=move |file| view! { <FileRow file=file /> }
                    />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn FileRow(file: FileInfo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = if file.icon.is_empty() {
        icon_for_name(&file.name).to_string()
    } else {
        file.icon.clone()
    };
    let url = raw_url_template().url_for(&file.url);
    let kind = PreviewKind::from_name(&file.name);
    let can_preview = file.preview;
    let download_name = file.name.clone();

    let for_preview = file.clone();
    let on_preview = move |_: leptos::ev::MouseEvent| {
        ctx.explorer.open_preview(for_preview.clone());
    };

    view! {
        <div class=css::row role="listitem">
            <span class=css::icon aria-hidden="true">{icon}</span>

            <div class=css::info>
                <span class=css::name>{file.name}</span>
                <span class=css::description>{file.description}</span>
            </div>

            <span class=css::size>{file.size}</span>

            <div class=css::actions>
                {can_preview.then(|| view! {
                    <button
                        class=css::previewButton
                        on:click=on_preview
                        title="Preview"
                    >
                        <Icon icon=preview_icon(kind) />
                        <span class=css::buttonLabel>"Preview"</span>
                    </button>
                })}
                <a
                    class=css::downloadButton
                    href=url
                    download=download_name
                    target="_blank"
                    rel="noopener"
                    title="Download"
                >
                    <Icon icon=ic::DOWNLOAD />
                    <span class=css::buttonLabel>"Download"</span>
                </a>
            </div>
        </div>
    }
}
