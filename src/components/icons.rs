//! Centralized icon definitions for UI chrome.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! Catalog entries carry their own emoji icons; these are for buttons,
//! navigation and the preview modal.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuBookOpen as FilePdf, LuChevronRight as ChevronRight,
        LuDownload as Download, LuEye as Eye, LuFile as File, LuFolder as Folder,
        LuFolderOpen as Explorer, LuHouse as Home, LuImage as FileImage, LuList as List,
        LuPlus as Plus, LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Up, BsChevronRight as ChevronRight, BsDownload as Download, BsEye as Eye,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFolder2 as Explorer, BsFolderFill as Folder, BsHouseFill as Home, BsListUl as List,
        BsPlusLg as Plus, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UP, Up);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(PLUS, Plus);
themed_icon!(EXPLORER, Explorer);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EYE, Eye);
