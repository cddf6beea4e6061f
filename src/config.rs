//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use filedeck_core::RawUrlTemplate;

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the top bar and document title.
pub const APP_NAME: &str = "filedeck";

/// Short description shown next to the site name.
pub const APP_TAGLINE: &str = "Shared documents and downloads";

// =============================================================================
// Download Host
// =============================================================================

/// Repository owner serving the files. Replace before deploying.
pub const GITHUB_USERNAME: &str = filedeck_core::remote::DEFAULT_USERNAME;

/// Repository holding the `files/` tree.
pub const GITHUB_REPO: &str = filedeck_core::remote::DEFAULT_REPO;

/// Branch to serve raw files from.
pub const GITHUB_BRANCH: &str = filedeck_core::remote::DEFAULT_BRANCH;

/// URL template for downloads and previews.
pub fn raw_url_template() -> RawUrlTemplate {
    RawUrlTemplate::new(GITHUB_USERNAME, GITHUB_REPO, GITHUB_BRANCH)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query under which the preview modal goes full screen.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Placeholder text of the search box.
pub const SEARCH_PLACEHOLDER: &str = "Search files and folders...";

/// Shown for records without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
