//! Emoji icons by file extension.

use crate::preview::extension;

/// Fallback glyph for unknown extensions.
pub const DEFAULT_ICON: &str = "📁";

/// Pick a display icon for a file name.
pub fn icon_for_name(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("pdf") => "📄",
        Some("doc" | "docx") => "📝",
        Some("txt") => "📃",
        Some("jpg" | "jpeg" | "png" | "gif") => "🖼️",
        Some("zip" | "rar") => "📦",
        Some("mp4") => "🎬",
        Some("mp3") => "🎵",
        _ => DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(icon_for_name("a.pdf"), "📄");
        assert_eq!(icon_for_name("a.DOCX"), "📝");
        assert_eq!(icon_for_name("a.jpeg"), "🖼️");
        assert_eq!(icon_for_name("a.rar"), "📦");
        assert_eq!(icon_for_name("a.mp3"), "🎵");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(icon_for_name("a.exe"), DEFAULT_ICON);
        assert_eq!(icon_for_name("Makefile"), DEFAULT_ICON);
    }
}
