//! Browser object-store adapter over the hosted provider's HTTP API.

use serde::Serialize;
use storage_host::{
    filter_placeholder_entries, ListOptions, ObjectStoreFuture, ObjectStoreService, StorageEntry,
    StoreConfig, StoreError,
};

use crate::bridge;

#[derive(Debug, Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    #[serde(flatten)]
    options: ListOptions,
}

#[derive(Debug, Clone)]
/// Object-store service backed by the provider's HTTP API via browser `fetch`.
pub struct WebObjectStoreService {
    config: StoreConfig,
}

impl WebObjectStoreService {
    /// Creates a service handle for the configured endpoint and bucket.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn list_entries(
        &self,
        prefix: &str,
        options: ListOptions,
    ) -> Result<Vec<StorageEntry>, StoreError> {
        let body = serde_json::to_string(&ListRequest { prefix, options })
            .map_err(|e| StoreError::List(e.to_string()))?;
        let raw = bridge::objects::http_post_json(&self.config.list_url(), &self.config.anon_key, &body)
            .await
            .map_err(StoreError::List)?;
        let entries: Vec<StorageEntry> =
            serde_json::from_str(&raw).map_err(|e| StoreError::List(e.to_string()))?;
        Ok(filter_placeholder_entries(entries))
    }
}

impl ObjectStoreService for WebObjectStoreService {
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        options: ListOptions,
    ) -> ObjectStoreFuture<'a, Result<Vec<StorageEntry>, StoreError>> {
        Box::pin(self.list_entries(prefix, options))
    }

    fn upload<'a>(
        &'a self,
        key: &'a str,
        content_type: &'a str,
        bytes: Vec<u8>,
    ) -> ObjectStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            bridge::objects::http_post_bytes(
                &self.config.object_url(key),
                &self.config.anon_key,
                content_type,
                bytes,
            )
            .await
            .map_err(StoreError::Upload)
        })
    }

    fn download<'a>(&'a self, key: &'a str) -> ObjectStoreFuture<'a, Result<Vec<u8>, StoreError>> {
        Box::pin(async move {
            bridge::objects::http_get_bytes(&self.config.object_url(key), &self.config.anon_key)
                .await
                .map_err(StoreError::Download)
        })
    }
}

#[cfg(test)]
mod tests {
    use storage_host::SortColumn;

    use super::*;

    #[test]
    fn list_request_serializes_to_provider_body_shape() {
        let body = serde_json::to_value(ListRequest {
            prefix: "docs/reports",
            options: ListOptions::sorted_by(SortColumn::UpdatedAt),
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "prefix": "docs/reports",
                "limit": 100,
                "offset": 0,
                "sortBy": {"column": "updated_at", "order": "asc"}
            })
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_target_reports_unsupported_transport() {
        use futures::executor::block_on;

        let service = WebObjectStoreService::new(StoreConfig::default());
        let store_obj: &dyn ObjectStoreService = &service;

        let err = block_on(store_obj.list("", ListOptions::default())).expect_err("list");
        assert_eq!(
            err,
            StoreError::List(
                "Browser network APIs are only available when compiled for wasm32".to_string()
            )
        );
        let err = block_on(store_obj.download("a.png")).expect_err("download");
        assert!(matches!(err, StoreError::Download(_)));
    }
}
