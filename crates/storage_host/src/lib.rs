//! Typed host-domain contracts and shared models for the MyStore object-storage backend.
//!
//! This crate is the API-first boundary between the MyStore UI and the hosted storage
//! provider. It owns the listing/entry models, path-key helpers, the object-store and
//! preference service traits, and the error taxonomy, while concrete browser adapters
//! live in `storage_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod entry;
pub mod error;
pub mod path;
pub mod prefs;
pub mod service;

pub use config::StoreConfig;
pub use entry::{
    filter_placeholder_entries, EntryMetadata, ListOptions, ListingPrefs, SortBy, SortColumn,
    SortOrder, StorageEntry, LISTING_PREFS_KEY, PLACEHOLDER_OBJECT_NAME,
};
pub use error::StoreError;
pub use path::{normalize_prefix, upload_key};
pub use prefs::{
    load_listing_prefs, save_listing_prefs, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    PrefsStoreFuture,
};
pub use service::{
    MemoryObjectStoreService, NoopObjectStoreService, ObjectStoreFuture, ObjectStoreService,
};
