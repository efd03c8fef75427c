//! Browser (`wasm32`) implementations of [`storage_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the hosted object
//! store and local preference storage, plus the blob/object-URL helpers the
//! UI needs for previews and downloads.
//!
//! Transport bindings live under `bridge/`:
//! - `bridge::objects`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod blob_url;
pub mod objects;
pub mod prefs;

pub use blob_url::{file_bytes, object_url_from_bytes, revoke_object_url, save_object_url};
pub use objects::WebObjectStoreService;
pub use prefs::WebPrefsStore;
