//! Gallery media classification.
//!
//! The file extension decides the category; the file itself is never opened
//! or sniffed.

use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "ico"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "avi", "mov", "wmv", "flv", "m4v"];

/// URI an image loader can fetch `src` from.
///
/// Sources that already carry a scheme are passed through; anything else is
/// a path under `root`.
pub fn media_uri(root: &str, src: &str) -> String {
    if src.contains("://") {
        src.to_string()
    } else {
        format!("file://{}", Path::new(root).join(src).display())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    /// Rendered as an "Unsupported format" placeholder.
    Unsupported,
}

impl MediaKind {
    pub fn from_path(src: &str) -> Self {
        let Some((_, extension)) = src.rsplit_once('.') else {
            return MediaKind::Unsupported;
        };
        let extension = extension.to_ascii_lowercase();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Unsupported
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Unsupported => "Unsupported format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(MediaKind::from_path("a.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("img/galeri-1.JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("clip.WebM"), MediaKind::Video);
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        assert_eq!(MediaKind::from_path("a.tiff"), MediaKind::Unsupported);
        assert_eq!(MediaKind::from_path("noext"), MediaKind::Unsupported);
        assert_eq!(MediaKind::from_path(""), MediaKind::Unsupported);
        assert_eq!(MediaKind::from_path("img.png/raw"), MediaKind::Unsupported);
    }

    #[test]
    fn relative_sources_resolve_under_root() {
        let uri = media_uri("assets", "galeri-1.jpg");
        assert!(uri.starts_with("file://assets"));
        assert!(uri.ends_with("galeri-1.jpg"));

        assert_eq!(
            media_uri("assets", "https://example.com/a.png"),
            "https://example.com/a.png"
        );
    }
}
