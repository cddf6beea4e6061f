//! Data models and types for the web application.
//!
//! Catalog and navigation types live in `filedeck_core`; this module only
//! holds browser-side types:
//! - [`AppRoute`], [`Page`] - Hash-based navigation

mod route;

pub use route::{AppRoute, Page};
