//! MyStore listing application: reducer-driven folder browsing, previews, and uploads.
//!
//! The crate owns the listing screen state machine and its Leptos views. All
//! storage access goes through the [`storage_host`] service contracts; the
//! composition layer injects concrete adapters via [`services::StoreServices`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod breadcrumb;
pub mod file_item;
pub mod format;
pub mod listing;
pub mod model;
pub mod preview;
pub mod reducer;
pub mod services;

pub use breadcrumb::{resolve_breadcrumb, BreadcrumbEntry, ListingBreadcrumbs};
pub use file_item::FileCard;
pub use format::{date_label, format_size_mb};
pub use listing::StoreListingView;
pub use model::{ListingPhase, ListingState, ToastKind, ToastMessage};
pub use preview::{preview_variant, should_fetch_preview, PreviewVariant};
pub use reducer::{reduce_listing, ListingAction, ListingEffect, ReducerError};
pub use services::{provide_store_services, use_store_services, StoreServices};
