//! File preview modal.
//!
//! Images render inline (with a fallback message when they fail to load),
//! PDFs render in an embedded viewer, anything else shows a notice. The
//! modal closes on the close button, a backdrop click, or Escape, and goes
//! full screen on narrow viewports.

use filedeck_core::{FileInfo, PreviewKind};
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{MOBILE_QUERY, raw_url_template};

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");

const UNSUPPORTED_TYPE: &str = "Preview is not available for this file type.";
const IMAGE_LOAD_FAILED: &str = "The image could not be loaded. Try downloading it instead.";

/// Modal host; renders only while a file is selected for preview.
#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_mobile = use_media_query(MOBILE_QUERY);

    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && ctx.explorer.preview.with_untracked(Option::is_some) {
            ctx.explorer.close_preview();
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        ctx.explorer
            .preview
            .get()
            .map(|file| view! { <PreviewDialog file=file fullscreen=is_mobile /> })
    }
}

#[component]
fn PreviewDialog(file: FileInfo, fullscreen: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let url = raw_url_template().url_for(&file.url);
    let kind = PreviewKind::from_name(&file.name);
    let close = move || ctx.explorer.close_preview();

    let dialog_class = move || {
        if fullscreen.get() {
            format!("{} {}", css::dialog, css::dialogFullscreen)
        } else {
            css::dialog.to_string()
        }
    };

    view! {
        <div class=css::backdrop on:click=move |_| close()>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                aria-label=format!("Preview: {}", file.name)
                on:click=|e| e.stop_propagation()
            >
                <header class=css::header>
                    <span class=css::filename>{file.name.clone()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| close()
                        title="Close preview"
                        aria-label="Close preview"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::content>
                    <PreviewBody kind=kind url=url.clone() name=file.name.clone() />
                </div>

                <footer class=css::footer>
                    <span class=css::meta>{file.size.clone()}</span>
                    <a
                        class=css::downloadButton
                        href=url
                        download=file.name.clone()
                        target="_blank"
                        rel="noopener"
                    >
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </a>
                </footer>
            </div>
        </div>
    }
}

/// Preview content by kind.
#[component]
fn PreviewBody(kind: PreviewKind, url: String, name: String) -> impl IntoView {
    match kind {
        PreviewKind::Image => view! { <ImagePreview url=url name=name /> }.into_any(),
        PreviewKind::Pdf => view! {
            <iframe class=css::pdfFrame src=url title=name></iframe>
        }
        .into_any(),
        PreviewKind::Unsupported => view! {
            <Unavailable message=UNSUPPORTED_TYPE />
        }
        .into_any(),
    }
}

#[component]
fn ImagePreview(url: String, name: String) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=|| view! {
                <Unavailable message=IMAGE_LOAD_FAILED />
            }
        >
            <img
                class=css::image
                src=url.clone()
                alt=name.clone()
                on:error=move |_| failed.set(true)
            />
        </Show>
    }
}

#[component]
fn Unavailable(message: &'static str) -> impl IntoView {
    view! {
        <div class=css::unavailable>
            <span class=css::unavailableIcon><Icon icon=ic::FILE /></span>
            <p>{message}</p>
        </div>
    }
}
