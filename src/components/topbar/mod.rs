//! Top bar component.
//!
//! Displays the site name and links between the explorer and the
//! shared-file pages.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::{AppRoute, Page};

stylance::import_crate_style!(css, "src/components/topbar/topbar.module.css");

/// Top bar with site title and page links.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Title, tagline, icon + label links |
/// | Mobile (< 768px) | Title and icon-only links |
#[component]
pub fn TopBar(page: Memo<Page>) -> impl IntoView {
    view! {
        <header class=css::bar>
            <a class=css::brand href=AppRoute::browse("").to_hash()>
                <span class=css::brandName>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </a>

            <nav class=css::links>
                <PageLink page=page target=Page::Explorer route=AppRoute::browse("") icon=ic::EXPLORER label="Browse" />
                <PageLink page=page target=Page::Shared route=AppRoute::Shared icon=ic::LIST label="Shared" />
                <PageLink page=page target=Page::Record route=AppRoute::Record icon=ic::PLUS label="Record" />
            </nav>
        </header>
    }
}

#[component]
fn PageLink(
    page: Memo<Page>,
    target: Page,
    route: AppRoute,
    icon: IconData,
    label: &'static str,
) -> impl IntoView {
    let is_active = Signal::derive(move || page.get() == target);

    view! {
        <a
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::link, css::linkActive)
                } else {
                    css::link.to_string()
                }
            }
            href=route.to_hash()
            title=label
            aria-current=move || is_active.get().then_some("page")
        >
            <span class=css::linkIcon><Icon icon=icon /></span>
            <span class=css::linkLabel>{label}</span>
        </a>
    }
}
