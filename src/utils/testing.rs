//! Helpers for browser tests: mount a view into a detached host element
//! and let the reactive system settle.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use super::dom;

/// A mounted view; unmounts when dropped.
pub struct Mounted<M> {
    pub host: HtmlElement,
    _handle: M,
}

/// Mount `f` into a fresh `<div>` appended to `<body>`.
pub fn mount<F, N>(f: F) -> Mounted<leptos::mount::UnmountHandle<N::State>>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = document();
    let host = document
        .create_element("div")
        .expect("create host")
        .unchecked_into::<HtmlElement>();
    document
        .body()
        .expect("document has a body")
        .append_child(&host)
        .expect("attach host");

    let handle = mount_to(host.clone(), f);
    Mounted {
        host,
        _handle: handle,
    }
}

/// Wait one macrotask so scheduled effects run.
pub async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = dom::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
        }
    });
    let _ = JsFuture::from(promise).await;
}
