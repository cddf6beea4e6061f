//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and application-level setup logic following Leptos conventions.

use filedeck_core::{Catalog, FileInfo, Navigator};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::APP_NAME;
use crate::utils::{dom, log};

// ============================================================================
// ExplorerState
// ============================================================================

/// Explorer state managed with Leptos signals.
///
/// The navigator is the single source of truth for the current path and
/// search term; listings are derived from it on demand.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Current path and search term.
    pub navigator: RwSignal<Navigator>,
    /// File shown in the preview modal, if open.
    pub preview: RwSignal<Option<FileInfo>>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            navigator: RwSignal::new(Navigator::new()),
            preview: RwSignal::new(None),
        }
    }

    /// Move to `path` unless already there. Keeps the search term.
    pub fn sync_path(&self, path: &str) {
        if self.navigator.with_untracked(|n| n.current_path() != path) {
            self.navigator.update(|n| n.navigate_to(path));
        }
    }

    pub fn set_search(&self, term: String) {
        self.navigator.update(|n| n.set_search_term(term));
    }

    pub fn clear_search(&self) {
        self.navigator.update(|n| n.clear_search());
    }

    pub fn open_preview(&self, file: FileInfo) {
        self.preview.set(Some(file));
    }

    pub fn close_preview(&self) {
        self.preview.set(None);
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The catalog tree. Loaded once at startup and never mutated.
    pub catalog: StoredValue<Catalog>,

    /// Explorer state (navigation, search, preview).
    pub explorer: ExplorerState,
}

impl AppContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            explorer: ExplorerState::new(),
        }
    }
}

/// Load the bundled catalog.
///
/// A catalog that fails to parse or has integrity issues is logged and
/// replaced by an empty one, so the app still renders.
fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            let (folders, files) = catalog.totals();
            log::info(&format!("catalog loaded: {} folders, {} files", folders, files));
            catalog
        }
        Err(e) => {
            log::error(&format!("catalog failed to load: {}", e));
            Catalog::empty()
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the catalog and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(load_catalog());
    provide_context(ctx);

    dom::set_title(APP_NAME);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f7fa;
                    color: #333;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #d9534f; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #666; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #fff;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #888;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #d9534f;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #667eea;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
