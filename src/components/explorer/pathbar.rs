//! Breadcrumb bar.
//!
//! Displays the trail from the root to the current folder with clickable
//! segments. Segments show folder display names where the catalog has them.

use filedeck_core::Crumb;
use filedeck_core::breadcrumb::ROOT_LABEL;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::explorer::Listing;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone)]
struct PathSegment {
    label: String,
    icon: icondata::Icon,
    /// Cumulative path of the crumb
    path: String,
    /// Target route for navigation (None = current/disabled)
    target: Option<AppRoute>,
}

fn segments(ctx: AppContext, crumbs: &[Crumb]) -> Vec<PathSegment> {
    let last = crumbs.len().saturating_sub(1);

    ctx.catalog.with_value(|catalog| {
        crumbs
            .iter()
            .enumerate()
            .map(|(idx, crumb)| {
                let (label, icon) = if crumb.is_root() {
                    (ROOT_LABEL.to_string(), ic::HOME)
                } else {
                    let name = catalog
                        .folder_at(&crumb.path)
                        .map(|info| info.name.clone())
                        .unwrap_or_else(|| crumb.label.clone());
                    (name, ic::FOLDER)
                };

                PathSegment {
                    label,
                    icon,
                    path: crumb.path.clone(),
                    target: (idx != last).then(|| AppRoute::browse(crumb.path.clone())),
                }
            })
            .collect()
    })
}

/// Path bar component displayed above the listing.
#[component]
pub fn PathBar(listing: Memo<Listing>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Breadcrumb">
            {move || {
                let crumbs = listing.with(|l| l.crumbs.clone());

                segments(ctx, &crumbs)
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {match seg.target {
                                    Some(target) => view! {
                                        <SegmentLink
                                            icon=seg.icon
                                            label=seg.label
                                            path=seg.path
                                            on_click=move || target.push()
                                        />
                                    }.into_any(),
                                    None => view! {
                                        <SegmentCurrent icon=seg.icon label=seg.label path=seg.path />
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, path: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment data-path=path on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String, path: String) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", css::segment, css::segmentCurrent)
            data-path=path
            disabled=true
            aria-current="page"
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
