//! Record form page.
//!
//! Adds a reference to a file that is already committed to the backing
//! repository. Nothing is uploaded; the download URL is derived from the
//! repository-relative path.

use filedeck_core::RecordDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::raw_url_template;
use crate::models::AppRoute;
use crate::utils::storage::open_shared_files;
use crate::utils::{log, time};

stylance::import_crate_style!(css, "src/components/shared/shared.module.css");

/// Outcome of the last submit.
#[derive(Clone, Debug, PartialEq)]
enum Status {
    Recorded(String),
    Failed(String),
}

#[component]
pub fn RecordForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Status>);

    let url_preview = Memo::new(move |_| {
        path.with(|p| {
            let p = p.trim();
            (!p.is_empty()).then(|| raw_url_template().url_for(p))
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let draft = RecordDraft {
            name: name.get_untracked(),
            path: path.get_untracked(),
            description: description.get_untracked(),
        };

        let result = open_shared_files().and_then(|mut store| {
            let recorded = store.record(draft, time::now_ms(), time::today())?;
            Ok(recorded.name.clone())
        });

        match result {
            Ok(recorded) => {
                log::info(&format!("recorded shared file {}", recorded));
                name.set(String::new());
                path.set(String::new());
                description.set(String::new());
                status.set(Some(Status::Recorded(recorded)));
            }
            Err(e) => {
                log::warn(&format!("record failed: {}", e));
                status.set(Some(Status::Failed(e.to_string())));
            }
        }
    };

    view! {
        <section class=css::page>
            <header class=css::header>
                <h1 class=css::title>"Record a file"</h1>
            </header>

            <p class=css::hint>
                "Commit the file to the repository first (for example under "
                <code>"files/"</code>
                "), then record its path here so it shows up on the shared files page."
            </p>

            <form class=css::form on:submit=on_submit>
                <label class=css::field>
                    <span class=css::fieldLabel>"File name"</span>
                    <input
                        class=css::input
                        type="text"
                        required=true
                        placeholder="report.pdf"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span class=css::fieldLabel>"Path in repository"</span>
                    <input
                        class=css::input
                        type="text"
                        required=true
                        placeholder="files/report.pdf"
                        prop:value=move || path.get()
                        on:input=move |ev| path.set(event_target_value(&ev))
                    />
                    {move || url_preview.get().map(|url| view! {
                        <span class=css::urlPreview>{url}</span>
                    })}
                </label>

                <label class=css::field>
                    <span class=css::fieldLabel>"Description"</span>
                    <textarea
                        class=css::textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button class=css::primaryButton type="submit">
                    <Icon icon=ic::PLUS />
                    "Record"
                </button>
            </form>

            {move || status.get().map(|s| match s {
                Status::Recorded(file) => view! {
                    <p class=css::statusOk>
                        {format!("Recorded {}. ", file)}
                        <a href=AppRoute::Shared.to_hash()>"View shared files"</a>
                    </p>
                }.into_any(),
                Status::Failed(message) => view! {
                    <p class=css::statusError>{message}</p>
                }.into_any(),
            })}
        </section>
    }
}
