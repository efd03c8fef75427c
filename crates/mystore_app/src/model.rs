//! Listing screen state model.

use storage_host::{SortColumn, StorageEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Lifecycle phase of the folder listing.
///
/// One explicit phase per screen instead of boolean-flag combinations; every
/// transition goes through [`crate::reducer::reduce_listing`].
pub enum ListingPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A listing request is in flight.
    Loading,
    /// The most recent listing request resolved.
    Loaded,
    /// The most recent listing request failed; prior entries are retained.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Full state of one listing screen instance.
pub struct ListingState {
    /// Folder prefix currently being browsed (`""` is the store root).
    pub prefix: String,
    /// Listing lifecycle phase.
    pub phase: ListingPhase,
    /// Entries from the most recent successful listing, placeholder filtered.
    pub entries: Vec<StorageEntry>,
    /// Active sort column; order is always ascending.
    pub sort: SortColumn,
    /// Whether the upload modal is open.
    pub modal_open: bool,
    /// Folder-name field value inside the upload modal.
    pub folder_name: String,
    /// Whether an upload request is in flight.
    pub upload_in_flight: bool,
}

impl ListingState {
    /// Fresh state for browsing the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Category of a transient toast notification.
pub enum ToastKind {
    /// Operation started and is in flight.
    Progress,
    /// Operation completed.
    Success,
    /// Operation failed.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One transient toast notification.
pub struct ToastMessage {
    /// Notification category.
    pub kind: ToastKind,
    /// User-facing message text.
    pub text: String,
}
