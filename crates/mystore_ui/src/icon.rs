//! Centralized icon API rendering inline SVG glyphs.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stable icon identifiers used across the listing screens.
pub enum IconName {
    /// Folder entry glyph.
    Folder,
    /// Generic file glyph.
    FileGeneric,
    /// PDF document glyph.
    FilePdf,
    /// Video file glyph.
    FileVideo,
    /// Upload action glyph.
    Upload,
    /// Download action glyph.
    Download,
    /// Close/dismiss glyph.
    Close,
    /// Breadcrumb separator glyph.
    ChevronRight,
}

impl IconName {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::FileGeneric => "file-generic",
            Self::FilePdf => "file-pdf",
            Self::FileVideo => "file-video",
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Close => "close",
            Self::ChevronRight => "chevron-right",
        }
    }

    const fn paths(self) -> &'static str {
        match self {
            Self::Folder => "M3 6a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6Z",
            Self::FileGeneric => "M6 2h8l5 5v13a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm8 0v5h5",
            Self::FilePdf => "M6 2h8l5 5v13a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm2 12h8M8 17h5",
            Self::FileVideo => "M6 2h8l5 5v13a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm4 9 5 3-5 3v-6Z",
            Self::Upload => "M12 16V4m0 0 4 4m-4-4-4 4M4 20h16",
            Self::Download => "M12 4v12m0 0 4-4m-4 4-4-4M4 20h16",
            Self::Close => "M6 6l12 12M18 6 6 18",
            Self::ChevronRight => "m9 5 7 7-7 7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Dense inline icon.
    Sm,
    /// Default icon.
    #[default]
    Md,
    /// Prominent icon for cards and empty states.
    Lg,
}

impl IconSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Shared icon primitive rendering a stroke-based SVG glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.paths()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let names = [
            IconName::Folder,
            IconName::FileGeneric,
            IconName::FilePdf,
            IconName::FileVideo,
            IconName::Upload,
            IconName::Download,
            IconName::Close,
            IconName::ChevronRight,
        ];
        let mut tokens: Vec<&str> = names.iter().map(|n| n.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), names.len());
    }
}
