//! Shared UI primitive library for the MyStore listing screens.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the site CSS layers. App views
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    BreadcrumbSegment, BreadcrumbTrail, Button, ButtonSize, ButtonVariant, Card, Cluster,
    EmptyState, FieldGroup, FieldVariant, Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, Modal, PreviewFrame, SegmentedControl, SegmentedControlOption, Stack,
    SurfaceVariant, Text, TextField, TextRole, TextTone, Toast, ToastTone, ToolBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        BreadcrumbSegment, BreadcrumbTrail, Button, ButtonSize, ButtonVariant, Card, Cluster,
        EmptyState, FieldGroup, FieldVariant, Grid, Heading, Icon, IconName, IconSize, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, Modal, PreviewFrame, SegmentedControl,
        SegmentedControlOption, Stack, SurfaceVariant, Text, TextField, TextRole, TextTone, Toast,
        ToastTone, ToolBar,
    };
}
