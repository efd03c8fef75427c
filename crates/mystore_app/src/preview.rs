//! Preview-variant selection for listing entries.

use storage_host::StorageEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How an entry's card cover is rendered.
pub enum PreviewVariant {
    /// Folder glyph; folder prefixes carry no renderable content.
    FolderIcon,
    /// Inline image preview once the blob is fetched.
    Image,
    /// PDF document glyph.
    PdfIcon,
    /// Inline video player opened from the card.
    VideoPlayer,
    /// Generic file glyph for unrecognized content types.
    GenericFileIcon,
}

/// Selects the preview variant for one listing entry.
///
/// Deterministic in the entry's metadata presence and MIME type.
pub fn preview_variant(entry: &StorageEntry) -> PreviewVariant {
    let Some(metadata) = entry.metadata.as_ref() else {
        return PreviewVariant::FolderIcon;
    };
    match metadata.mime_type.as_str() {
        "image/gif" | "image/jpeg" | "image/png" => PreviewVariant::Image,
        "application/pdf" => PreviewVariant::PdfIcon,
        "video/mp4" => PreviewVariant::VideoPlayer,
        _ => PreviewVariant::GenericFileIcon,
    }
}

/// Whether a card should fetch the entry's bytes for preview and download.
///
/// Only file entries fetch; folder prefixes never trigger a download call.
pub fn should_fetch_preview(entry: &StorageEntry) -> bool {
    !entry.is_folder()
}

#[cfg(test)]
mod tests {
    use storage_host::EntryMetadata;

    use super::*;

    fn entry(mime_type: Option<&str>) -> StorageEntry {
        StorageEntry {
            name: "entry".to_string(),
            updated_at: None,
            metadata: mime_type.map(|mime_type| EntryMetadata {
                mime_type: mime_type.to_string(),
                size_bytes: 1,
            }),
        }
    }

    #[test]
    fn variant_decision_table() {
        let cases = [
            (None, PreviewVariant::FolderIcon),
            (Some("image/gif"), PreviewVariant::Image),
            (Some("image/jpeg"), PreviewVariant::Image),
            (Some("image/png"), PreviewVariant::Image),
            (Some("application/pdf"), PreviewVariant::PdfIcon),
            (Some("video/mp4"), PreviewVariant::VideoPlayer),
            (Some("image/webp"), PreviewVariant::GenericFileIcon),
            (Some("text/plain"), PreviewVariant::GenericFileIcon),
        ];
        for (mime_type, expected) in cases {
            assert_eq!(
                preview_variant(&entry(mime_type)),
                expected,
                "mime_type={mime_type:?}"
            );
        }
    }

    #[test]
    fn folder_entries_never_fetch_previews() {
        assert!(!should_fetch_preview(&entry(None)));
        assert!(should_fetch_preview(&entry(Some("image/png"))));
        assert!(should_fetch_preview(&entry(Some("text/plain"))));
    }
}
