//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`explorer`] - Catalog browser with search and preview
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`shared`] - Recorded files list and record form
//! - [`topbar`] - Site title and page links

pub mod explorer;
pub mod icons;
pub mod router;
pub mod shared;
pub mod topbar;

pub use router::AppRouter;
