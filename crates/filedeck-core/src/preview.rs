//! Preview dispatch by file extension.

/// How a file is shown in the preview modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Rendered with an `<img>` tag
    Image,
    /// Rendered in an embedded PDF viewer
    Pdf,
    /// "Preview not supported" message
    Unsupported,
}

impl PreviewKind {
    /// Detect the preview mode from a file name.
    pub fn from_name(name: &str) -> Self {
        match extension(name).as_deref() {
            Some("jpg" | "png" | "gif" | "webp") => Self::Image,
            Some("pdf") => Self::Pdf,
            _ => Self::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Lowercased text after the last `.`, if any.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_kind_detection() {
        assert_eq!(PreviewKind::from_name("photo.jpg"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_name("logo.png"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_name("anim.gif"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_name("shot.webp"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_name("manual.pdf"), PreviewKind::Pdf);
        assert_eq!(PreviewKind::from_name("notes.docx"), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::from_name("bundle.zip"), PreviewKind::Unsupported);
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(PreviewKind::from_name("PHOTO.JPG"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_name("Report.PDF"), PreviewKind::Pdf);
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(PreviewKind::from_name("pdf"), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::from_name("trailing."), PreviewKind::Unsupported);
        assert_eq!(extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn test_is_supported() {
        assert!(PreviewKind::Image.is_supported());
        assert!(PreviewKind::Pdf.is_supported());
        assert!(!PreviewKind::Unsupported.is_supported());
    }
}
