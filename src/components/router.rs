//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works on any
//! static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the explorer path follows `#/browse/<path>`
//! - **Explorer is not remounted on navigation**: only a page change swaps views
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::components::shared::{RecordForm, SharedList};
use crate::components::topbar::TopBar;
use crate::models::{AppRoute, Page};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `#/` → explorer at the catalog root
/// - `#/browse/path` → explorer at `path`
/// - `#/shared` → recorded files
/// - `#/record` → record form
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    // Route drives the navigator; a path change also closes any open preview.
    Effect::new(move |_| {
        if let AppRoute::Browse { path } = route_memo.get() {
            ctx.explorer.sync_path(&path);
            ctx.explorer.close_preview();
        }
    });

    let page = Memo::new(move |_| route_memo.get().page());

    view! {
        <div class=css::layout>
            <TopBar page=page />
            <main class=css::main>
                {move || match page.get() {
                    Page::Explorer => view! { <Explorer /> }.into_any(),
                    Page::Shared => view! { <SharedList /> }.into_any(),
                    Page::Record => view! { <RecordForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
