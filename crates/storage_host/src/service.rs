//! Object-store service contracts and baseline adapters.

use std::{
    cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc,
};

use crate::entry::{EntryMetadata, ListOptions, SortColumn, StorageEntry};
use crate::error::StoreError;
use crate::path::normalize_prefix;

/// Object-safe boxed future used by [`ObjectStoreService`] async methods.
pub type ObjectStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the hosted object-storage backend.
///
/// One handle is constructed per application session and shared read-only by
/// every component that needs it; the handle performs no mutable bookkeeping.
pub trait ObjectStoreService {
    /// Lists the direct children of a folder prefix.
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        options: ListOptions,
    ) -> ObjectStoreFuture<'a, Result<Vec<StorageEntry>, StoreError>>;

    /// Uploads a file blob to the given storage key.
    fn upload<'a>(
        &'a self,
        key: &'a str,
        content_type: &'a str,
        bytes: Vec<u8>,
    ) -> ObjectStoreFuture<'a, Result<(), StoreError>>;

    /// Downloads the binary content of a storage key.
    fn download<'a>(&'a self, key: &'a str) -> ObjectStoreFuture<'a, Result<Vec<u8>, StoreError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op object-store adapter for unsupported targets and baseline tests.
pub struct NoopObjectStoreService;

impl NoopObjectStoreService {
    fn unavailable(op: &str) -> String {
        format!("object store unavailable: {op}")
    }
}

impl ObjectStoreService for NoopObjectStoreService {
    fn list<'a>(
        &'a self,
        _prefix: &'a str,
        _options: ListOptions,
    ) -> ObjectStoreFuture<'a, Result<Vec<StorageEntry>, StoreError>> {
        Box::pin(async { Err(StoreError::List(Self::unavailable("list"))) })
    }

    fn upload<'a>(
        &'a self,
        _key: &'a str,
        _content_type: &'a str,
        _bytes: Vec<u8>,
    ) -> ObjectStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Upload(Self::unavailable("upload"))) })
    }

    fn download<'a>(&'a self, _key: &'a str) -> ObjectStoreFuture<'a, Result<Vec<u8>, StoreError>> {
        Box::pin(async { Err(StoreError::Download(Self::unavailable("download"))) })
    }
}

#[derive(Debug, Clone)]
struct StoredObject {
    content_type: String,
    bytes: Vec<u8>,
    updated_at: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory object store with the provider's lexical-folder semantics.
///
/// Folders exist only as common key prefixes; listing a prefix synthesizes
/// folder entries for deeper keys and file entries for direct children.
pub struct MemoryObjectStoreService {
    objects: Rc<RefCell<BTreeMap<String, StoredObject>>>,
    upload_counter: Rc<RefCell<u32>>,
}

impl MemoryObjectStoreService {
    fn list_prefix(&self, prefix: &str, options: ListOptions) -> Vec<StorageEntry> {
        let prefix = normalize_prefix(prefix);
        let mut entries: Vec<StorageEntry> = Vec::new();
        for (key, object) in self.objects.borrow().iter() {
            let remainder = match strip_prefix(key, &prefix) {
                Some(remainder) => remainder,
                None => continue,
            };
            match remainder.split_once('/') {
                Some((folder, _)) => {
                    if !entries.iter().any(|e| e.name == folder && e.is_folder()) {
                        entries.push(StorageEntry {
                            name: folder.to_string(),
                            updated_at: None,
                            metadata: None,
                        });
                    }
                }
                None => entries.push(StorageEntry {
                    name: remainder.to_string(),
                    updated_at: Some(object.updated_at.clone()),
                    metadata: Some(EntryMetadata {
                        mime_type: object.content_type.clone(),
                        size_bytes: object.bytes.len() as u64,
                    }),
                }),
            }
        }

        match options.sort_by.column {
            SortColumn::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            SortColumn::UpdatedAt => entries.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        }
        entries
            .into_iter()
            .skip(options.offset as usize)
            .take(options.limit as usize)
            .collect()
    }
}

fn strip_prefix<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    if prefix.is_empty() {
        return Some(key);
    }
    key.strip_prefix(prefix)?.strip_prefix('/')
}

impl ObjectStoreService for MemoryObjectStoreService {
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        options: ListOptions,
    ) -> ObjectStoreFuture<'a, Result<Vec<StorageEntry>, StoreError>> {
        Box::pin(async move { Ok(self.list_prefix(prefix, options)) })
    }

    fn upload<'a>(
        &'a self,
        key: &'a str,
        content_type: &'a str,
        bytes: Vec<u8>,
    ) -> ObjectStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let mut counter = self.upload_counter.borrow_mut();
            *counter += 1;
            self.objects.borrow_mut().insert(
                normalize_prefix(key),
                StoredObject {
                    content_type: content_type.to_string(),
                    bytes,
                    updated_at: format!("2023-01-01T00:00:00.{:03}Z", *counter),
                },
            );
            Ok(())
        })
    }

    fn download<'a>(&'a self, key: &'a str) -> ObjectStoreFuture<'a, Result<Vec<u8>, StoreError>> {
        Box::pin(async move {
            self.objects
                .borrow()
                .get(&normalize_prefix(key))
                .map(|object| object.bytes.clone())
                .ok_or_else(|| StoreError::Download(format!("object not found: {key}")))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_object_store_reports_unavailable() {
        let store = NoopObjectStoreService;
        let store_obj: &dyn ObjectStoreService = &store;

        let err = block_on(store_obj.list("", ListOptions::default())).expect_err("list");
        assert_eq!(err, StoreError::List("object store unavailable: list".to_string()));
        let err =
            block_on(store_obj.upload("a.txt", "text/plain", Vec::new())).expect_err("upload");
        assert!(matches!(err, StoreError::Upload(_)));
        let err = block_on(store_obj.download("a.txt")).expect_err("download");
        assert!(matches!(err, StoreError::Download(_)));
    }

    #[test]
    fn memory_store_lists_direct_children_and_folder_prefixes() {
        let store = MemoryObjectStoreService::default();
        let store_obj: &dyn ObjectStoreService = &store;

        block_on(store_obj.upload("docs/a.pdf", "application/pdf", vec![1, 2, 3])).expect("upload");
        block_on(store_obj.upload("docs/archive/x.pdf", "application/pdf", vec![4])).expect("upload");
        block_on(store_obj.upload("top.png", "image/png", vec![5; 8])).expect("upload");

        let root = block_on(store_obj.list("", ListOptions::default())).expect("list root");
        let names: Vec<&str> = root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["docs", "top.png"]);
        assert!(root[0].is_folder());
        assert!(!root[1].is_folder());

        let docs = block_on(store_obj.list("docs", ListOptions::default())).expect("list docs");
        let names: Vec<&str> = docs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "archive"]);
        assert_eq!(
            docs[0].metadata.as_ref().map(|m| m.size_bytes),
            Some(3)
        );
    }

    #[test]
    fn memory_store_sorts_by_updated_at_when_requested() {
        let store = MemoryObjectStoreService::default();
        let store_obj: &dyn ObjectStoreService = &store;

        block_on(store_obj.upload("b.txt", "text/plain", vec![1])).expect("upload");
        block_on(store_obj.upload("a.txt", "text/plain", vec![2])).expect("upload");

        let by_date = block_on(store_obj.list(
            "",
            ListOptions::sorted_by(SortColumn::UpdatedAt),
        ))
        .expect("list");
        let names: Vec<&str> = by_date.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn memory_store_pages_with_offset_and_limit() {
        let store = MemoryObjectStoreService::default();
        let store_obj: &dyn ObjectStoreService = &store;

        for name in ["a.txt", "b.txt", "c.txt"] {
            block_on(store_obj.upload(name, "text/plain", vec![1])).expect("upload");
        }

        let page = block_on(store_obj.list(
            "",
            ListOptions {
                limit: 1,
                offset: 1,
                ..ListOptions::default()
            },
        ))
        .expect("list");
        let names: Vec<&str> = page.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt"]);
    }

    #[test]
    fn memory_store_download_round_trips_bytes() {
        let store = MemoryObjectStoreService::default();
        let store_obj: &dyn ObjectStoreService = &store;

        block_on(store_obj.upload("reports/q4.csv", "text/csv", vec![9, 9, 9])).expect("upload");
        assert_eq!(
            block_on(store_obj.download("reports/q4.csv")).expect("download"),
            vec![9, 9, 9]
        );
        let err = block_on(store_obj.download("missing.csv")).expect_err("missing");
        assert!(matches!(err, StoreError::Download(_)));
    }
}
